//! Spending categories and the ordered keyword rule table.
//!
//! The rule table is an immutable value passed explicitly into
//! categorization, so tests and callers can substitute their own tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of spending categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "subscriptions")]
    Subscriptions,
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "utilities")]
    Utilities,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "others")]
    Others,
}

impl Category {
    /// Declaration-order list, used for deterministic grouped output.
    pub const ALL: [Category; 6] = [
        Category::Subscriptions,
        Category::Food,
        Category::Shopping,
        Category::Utilities,
        Category::Education,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Subscriptions => "subscriptions",
            Category::Food => "food",
            Category::Shopping => "shopping",
            Category::Utilities => "utilities",
            Category::Education => "education",
            Category::Others => "others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule: any keyword substring match assigns the category.
/// Keywords are matched against the lowercased description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// Immutable, ordered rule table. Order is significant: the first rule
/// with a matching keyword wins, so overlapping keyword sets resolve to
/// the earlier rule. `Category::Others` is the unconditional fallback and
/// needs no rule of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl CategoryRules {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// The stock keyword table for HDFC-style statements.
    pub fn standard() -> Self {
        fn rule(category: Category, keywords: &[&str]) -> CategoryRule {
            CategoryRule {
                category,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            }
        }

        Self::new(vec![
            rule(
                Category::Subscriptions,
                &["spotify", "youtube", "prime", "zee", "hotstar"],
            ),
            rule(
                Category::Food,
                &["swiggy", "zomato", "dominos", "instamart", "blinkit"],
            ),
            rule(Category::Shopping, &["amazon", "flipkart", "myntra"]),
            rule(
                Category::Utilities,
                &["airtel", "jio", "electricity", "gas"],
            ),
            rule(Category::Education, &["school", "fees", "footprints"]),
        ])
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Map a description to exactly one category.
    ///
    /// Deterministic and total: the first rule (in declaration order) with
    /// a case-insensitive keyword substring match wins; no match falls
    /// back to `Category::Others`.
    pub fn categorize(&self, description: &str) -> Category {
        let desc = description.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|k| desc.contains(k.as_str())) {
                return rule.category;
            }
        }
        Category::Others
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::standard()
    }
}

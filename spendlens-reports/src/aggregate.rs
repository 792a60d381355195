//! Aggregate views over a frozen transaction set.
//!
//! All three views are read-only projections: recomputing over the same
//! snapshot yields identical results.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use spendlens_core::{Category, StatementMonth, Transaction};

/// How many vendors the vendor view keeps.
const TOP_VENDOR_LIMIT: usize = 10;

/// Net spend for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpend {
    pub month: StatementMonth,
    pub total: f64,
}

/// Net spend for one category, with its share of the overall total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: Category,
    pub total: f64,
    /// Percentage of the summed amount across all categories; 0 when the
    /// overall total is 0.
    pub share: f64,
}

/// Net spend against one vendor description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSpend {
    pub description: String,
    pub total: f64,
}

/// Sum of amounts grouped by month, ascending by month.
pub fn monthly_spend(transactions: &[Transaction]) -> Vec<MonthlySpend> {
    let mut totals: BTreeMap<StatementMonth, f64> = BTreeMap::new();
    for txn in transactions {
        *totals.entry(txn.month).or_default() += txn.amount;
    }
    totals
        .into_iter()
        .map(|(month, total)| MonthlySpend { month, total })
        .collect()
}

/// Sum of amounts grouped by category, emitted in category declaration
/// order. Categories with no transactions are omitted.
pub fn category_spend(transactions: &[Transaction]) -> Vec<CategorySpend> {
    let mut totals: HashMap<Category, f64> = HashMap::new();
    for txn in transactions {
        *totals.entry(txn.category).or_default() += txn.amount;
    }
    let grand: f64 = totals.values().sum();

    Category::ALL
        .iter()
        .filter_map(|category| {
            totals.get(category).map(|&total| CategorySpend {
                category: *category,
                total,
                share: if grand == 0.0 {
                    0.0
                } else {
                    total / grand * 100.0
                },
            })
        })
        .collect()
}

/// Sum of amounts grouped by exact description, descending by total,
/// truncated to the ten largest. Equal totals keep first-encountered
/// order.
pub fn top_vendors(transactions: &[Transaction]) -> Vec<VendorSpend> {
    let mut totals: HashMap<&str, (usize, f64)> = HashMap::new();
    for (index, txn) in transactions.iter().enumerate() {
        let entry = totals.entry(txn.description.as_str()).or_insert((index, 0.0));
        entry.1 += txn.amount;
    }

    let mut vendors: Vec<(&str, usize, f64)> = totals
        .into_iter()
        .map(|(description, (first_seen, total))| (description, first_seen, total))
        .collect();
    vendors.sort_by(|a, b| b.2.total_cmp(&a.2).then(a.1.cmp(&b.1)));
    vendors.truncate(TOP_VENDOR_LIMIT);

    vendors
        .into_iter()
        .map(|(description, _, total)| VendorSpend {
            description: description.to_string(),
            total,
        })
        .collect()
}

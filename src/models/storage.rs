use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageItem {
    pub ticker: String,
    pub amount: f64,
}

impl StorageItem {
    pub fn new(ticker: &str, amount: f64) -> Self {
        Self {
            ticker: ticker.to_string(),
            amount,
        }
    }
}

/// Raw storage snapshot of one planet. Items may repeat a ticker when the
/// upstream inventory is split across several stacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub items: Vec<StorageItem>,
}

impl Storage {
    pub fn new(items: Vec<StorageItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current stock per ticker with duplicate entries summed.
    pub fn stock_by_ticker(&self) -> HashMap<String, f64> {
        let mut stock = HashMap::new();
        for item in &self.items {
            *stock.entry(item.ticker.clone()).or_insert(0.0) += item.amount;
        }
        stock
    }

    /// Deduplicated items, in order of first appearance.
    pub fn merged_items(&self) -> Vec<StorageItem> {
        let mut merged: Vec<StorageItem> = Vec::new();
        let mut index_by_ticker: HashMap<&str, usize> = HashMap::new();
        for item in &self.items {
            match index_by_ticker.get(item.ticker.as_str()) {
                Some(&index) => merged[index].amount += item.amount,
                None => {
                    index_by_ticker.insert(&item.ticker, merged.len());
                    merged.push(item.clone());
                }
            }
        }
        merged
    }
}

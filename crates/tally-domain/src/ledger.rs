//! The in-memory ordered transaction collection and its category filter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Ordered collection of all transactions. Insertion order is display order;
/// ids are unique within the sequence.
///
/// Serializes transparently as the snapshot JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.transaction(id).is_some()
    }

    pub fn max_id(&self) -> Option<u64> {
        self.transactions.iter().map(|txn| txn.id).max()
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Removes the transaction with the given id. Returns whether anything
    /// was removed; a missing id leaves the ledger untouched.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        self.transactions.len() != before
    }

    /// Replaces the transaction with `transaction.id` in place, keeping its
    /// position. Returns false (and changes nothing) when the id is absent.
    pub fn replace(&mut self, transaction: Transaction) -> bool {
        match self
            .transactions
            .iter_mut()
            .find(|txn| txn.id == transaction.id)
        {
            Some(slot) => {
                *slot = transaction;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }
}

/// Category selector with the `All` sentinel from the original filter UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Interprets the sentinel label as `All`, anything else as a category.
    pub fn parse(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label.to_string())
        }
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => transaction.category == *label,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_LABEL),
            CategoryFilter::Category(label) => f.write_str(label),
        }
    }
}

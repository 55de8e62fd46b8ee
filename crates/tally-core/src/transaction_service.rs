//! Mutation operations over the ledger: add, remove, and the two-step edit.

use chrono::Utc;

use tally_domain::{Ledger, Transaction, TransactionKind};

use crate::CoreError;

/// User-supplied field values for a transaction, prior to validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
}

impl TransactionDraft {
    /// Checks the add/edit preconditions: non-empty date and description,
    /// finite positive amount.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.date.trim().is_empty() {
            return Err(CoreError::Validation("date must not be empty".into()));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "description must not be empty".into(),
            ));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(CoreError::Validation(
                "amount must be a positive number".into(),
            ));
        }
        Ok(())
    }

    fn into_transaction(self, id: u64) -> Transaction {
        Transaction::new(
            id,
            self.date,
            self.description,
            self.amount,
            self.kind,
            self.category,
        )
    }
}

impl From<&Transaction> for TransactionDraft {
    fn from(transaction: &Transaction) -> Self {
        Self {
            date: transaction.date.clone(),
            description: transaction.description.clone(),
            amount: transaction.amount,
            kind: transaction.kind,
            category: transaction.category.clone(),
        }
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Validates the draft, assigns a fresh id, and appends to the ledger.
    /// A rejected draft leaves the ledger untouched.
    pub fn add(ledger: &mut Ledger, draft: TransactionDraft) -> Result<u64, CoreError> {
        draft.validate()?;
        let id = Self::next_id(ledger);
        ledger.push(draft.into_transaction(id));
        Ok(id)
    }

    /// Removes the transaction with the given id. A missing id is a silent
    /// no-op; the return value only tells the caller whether to re-persist.
    pub fn remove(ledger: &mut Ledger, id: u64) -> bool {
        ledger.remove(id)
    }

    /// Returns a draft prefilled from the stored transaction, leaving the
    /// ledger untouched. Abandoning the edit costs nothing.
    pub fn begin_edit(ledger: &Ledger, id: u64) -> Option<TransactionDraft> {
        ledger.transaction(id).map(TransactionDraft::from)
    }

    /// Validates the draft and replaces the transaction in place, keeping
    /// the original id and position. Returns false when the id is absent.
    pub fn commit_edit(
        ledger: &mut Ledger,
        id: u64,
        draft: TransactionDraft,
    ) -> Result<bool, CoreError> {
        draft.validate()?;
        Ok(ledger.replace(draft.into_transaction(id)))
    }

    /// Time-based id assignment: current Unix-epoch milliseconds, bumped
    /// past the ledger's current maximum so sequential creation never
    /// collides.
    fn next_id(ledger: &Ledger) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        match ledger.max_id() {
            Some(max) if now <= max => max + 1,
            _ => now,
        }
    }
}

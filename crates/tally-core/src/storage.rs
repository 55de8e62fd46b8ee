use std::collections::HashSet;

use tally_domain::Ledger;

use crate::CoreError;

/// Abstraction over persistence backends for the transaction snapshot.
pub trait LedgerStorage: Send + Sync {
    /// Loads the persisted snapshot. Absent or unparseable state yields an
    /// empty ledger rather than an error.
    fn load_ledger(&self) -> Result<Ledger, CoreError>;

    /// Persists the full snapshot. Called after every successful mutation.
    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError>;
}

/// Detects anomalies within a ledger snapshot (duplicate ids, amounts that
/// would corrupt the aggregates). Imported data is the usual source.
pub fn ledger_warnings(ledger: &Ledger) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();
    for txn in ledger.iter() {
        if !seen.insert(txn.id) {
            warnings.push(format!("duplicate transaction id {}", txn.id));
        }
        if !txn.amount.is_finite() || txn.amount <= 0.0 {
            warnings.push(format!(
                "transaction {} has unusable amount {}",
                txn.id, txn.amount
            ));
        }
    }
    warnings
}

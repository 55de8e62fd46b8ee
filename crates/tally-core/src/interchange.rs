//! JSON import/export of the full snapshot.
//!
//! Export emits the same pretty-printed array the persistence layer writes.
//! Import wholesale-replaces the ledger; elements are validated one by one
//! so a single malformed entry cannot poison the aggregates.

use serde_json::Value;

use tally_domain::{Ledger, Transaction};

use crate::{CoreError, TransactionDraft};

/// Result of a bulk import: how many entries replaced the ledger and which
/// elements were rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOutcome {
    pub imported: usize,
    pub skipped: Vec<ImportSkip>,
}

/// One rejected import element, by its position in the source array.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSkip {
    pub index: usize,
    pub reason: String,
}

/// Serializes the ledger as the pretty-printed snapshot array.
pub fn export_snapshot(ledger: &Ledger) -> Result<String, CoreError> {
    serde_json::to_string_pretty(ledger).map_err(|err| CoreError::Serde(err.to_string()))
}

/// Parses `raw` and replaces the ledger contents with its valid elements.
///
/// Unparseable input or a non-array top-level value rejects the whole import
/// and leaves the ledger untouched, as does an array that yields no valid
/// transactions. Malformed elements inside an otherwise usable array are
/// skipped and reported. The contents are replaced, never merged.
pub fn import_snapshot(ledger: &mut Ledger, raw: &str) -> Result<ImportOutcome, CoreError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| CoreError::ImportFormat(format!("not valid JSON: {err}")))?;
    let Value::Array(items) = value else {
        return Err(CoreError::ImportFormat(
            "top-level value must be an array".into(),
        ));
    };

    let total = items.len();
    let mut outcome = ImportOutcome::default();
    let mut transactions = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        match decode_element(item) {
            Ok(txn) => transactions.push(txn),
            Err(reason) => outcome.skipped.push(ImportSkip { index, reason }),
        }
    }

    if transactions.is_empty() && total > 0 {
        return Err(CoreError::ImportFormat(format!(
            "no valid transactions among {total} elements"
        )));
    }

    outcome.imported = transactions.len();
    ledger.transactions = transactions;
    Ok(outcome)
}

/// Shape check via serde, then the same field preconditions `add` enforces.
fn decode_element(item: Value) -> Result<Transaction, String> {
    let txn: Transaction = serde_json::from_value(item).map_err(|err| err.to_string())?;
    TransactionDraft::from(&txn)
        .validate()
        .map_err(|err| err.to_string())?;
    Ok(txn)
}

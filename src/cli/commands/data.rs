//! JSON snapshot export and import.

use std::{fs, path::PathBuf};

use tally_core::{export_snapshot, import_snapshot, ledger_warnings};

use crate::cli::core::CommandError;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;

const DEFAULT_EXPORT_FILE: &str = "transactions.json";

pub fn export(context: &ShellContext, args: &[String]) -> Result<(), CommandError> {
    let path = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
    let json = export_snapshot(&context.ledger)?;
    fs::write(&path, json)?;
    output::success(format!(
        "Exported {} transactions to {}.",
        context.ledger.len(),
        path.display()
    ));
    Ok(())
}

/// Replaces the whole ledger with the file's contents. A rejected payload
/// leaves the current ledger untouched; individual malformed elements are
/// skipped and reported.
pub fn import(context: &mut ShellContext, args: &[String]) -> Result<(), CommandError> {
    let Some(path) = args.first() else {
        return Err(CommandError::Usage("import <path>".into()));
    };
    let raw = fs::read_to_string(path)?;
    let outcome = import_snapshot(&mut context.ledger, &raw)?;
    context.save()?;

    for skip in &outcome.skipped {
        output::warning(format!("skipped element {}: {}", skip.index, skip.reason));
    }
    for warning in ledger_warnings(&context.ledger) {
        output::warning(warning);
    }
    output::success(format!(
        "Imported {} transactions from {path}.",
        outcome.imported
    ));
    Ok(())
}

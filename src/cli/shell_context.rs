//! Owns the live ledger, configuration, and storage for one shell session.

use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::warn;

use tally_config::{Config, ConfigManager};
use tally_core::{ledger_warnings, LedgerStorage};
use tally_domain::Ledger;
use tally_storage_json::JsonLedgerStorage;

use crate::cli::core::{CliError, CliMode, CommandError};
use crate::cli::output;

pub struct ShellContext {
    pub mode: CliMode,
    pub config: Config,
    pub ledger: Ledger,
    pub running: bool,
    storage: JsonLedgerStorage,
    theme: ColorfulTheme,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base = base_dir();
        let manager = ConfigManager::with_base_dir(base.clone())?;
        let config = manager.load()?;

        let data_dir = config.data_dir.clone().unwrap_or_else(|| base.join("data"));
        let storage = JsonLedgerStorage::new(data_dir)?;
        let ledger = storage.load_ledger()?;
        for warning in ledger_warnings(&ledger) {
            warn!("{warning}");
        }

        Ok(Self {
            mode,
            config,
            ledger,
            running: true,
            storage,
            theme: ColorfulTheme::default(),
        })
    }

    pub fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub fn prompt(&self) -> String {
        "tally> ".to_string()
    }

    /// Persists the ledger; called after every successful mutation.
    pub fn save(&self) -> Result<(), CommandError> {
        self.storage.save_ledger(&self.ledger)?;
        Ok(())
    }

    /// Reports a recoverable command error and keeps the shell alive.
    pub fn report_error(&mut self, err: CommandError) -> Result<(), CliError> {
        output::error(&err);
        Ok(())
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt("Exit tallybook?")
            .default(true)
            .interact()?;
        Ok(confirmed)
    }
}

/// Base directory for config and data, overridable for tests and portable
/// setups via `TALLYBOOK_HOME`.
fn base_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("TALLYBOOK_HOME") {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|dir| dir.join("tallybook"))
        .unwrap_or_else(|| PathBuf::from(".tallybook"))
}

//! Filesystem-backed JSON persistence for the transaction snapshot.
//!
//! Writes go through a temporary file and a rename so a crash mid-write
//! never truncates the snapshot; the previous snapshot is kept one deep as
//! a `.bak` copy.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::warn;

use tally_core::{CoreError, LedgerStorage};
use tally_domain::Ledger;

const SNAPSHOT_FILE: &str = "transactions.json";
const BACKUP_SUFFIX: &str = "bak";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone)]
pub struct JsonLedgerStorage {
    snapshot_path: PathBuf,
}

impl JsonLedgerStorage {
    /// Stores the snapshot as `transactions.json` under `data_dir`,
    /// creating the directory when needed.
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            snapshot_path: data_dir.join(SNAPSHOT_FILE),
        })
    }

    /// Uses an explicit snapshot file location instead of the directory
    /// convention.
    pub fn with_snapshot_path(snapshot_path: PathBuf) -> Self {
        Self { snapshot_path }
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    pub fn backup_path(&self) -> PathBuf {
        suffixed_path(&self.snapshot_path, BACKUP_SUFFIX)
    }

    fn backup_existing_file(&self) -> Result<(), CoreError> {
        if !self.snapshot_path.exists() {
            return Ok(());
        }
        fs::copy(&self.snapshot_path, self.backup_path())?;
        Ok(())
    }
}

impl LedgerStorage for JsonLedgerStorage {
    fn load_ledger(&self) -> Result<Ledger, CoreError> {
        if !self.snapshot_path.exists() {
            return Ok(Ledger::new());
        }
        let data = fs::read_to_string(&self.snapshot_path)?;
        match serde_json::from_str(&data) {
            Ok(ledger) => Ok(ledger),
            Err(err) => {
                warn!(
                    "unreadable snapshot at {}: {err}; starting with an empty ledger",
                    self.snapshot_path.display()
                );
                Ok(Ledger::new())
            }
        }
    }

    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError> {
        self.backup_existing_file()?;
        let json =
            serde_json::to_string_pretty(ledger).map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = suffixed_path(&self.snapshot_path, TMP_SUFFIX);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.snapshot_path)?;
        Ok(())
    }
}

fn suffixed_path(path: &Path, suffix: &str) -> PathBuf {
    let mut out = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, suffix),
        None => suffix.to_string(),
    };
    out.set_extension(ext);
    out
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Currency code used for display only; amounts carry no currency.
    #[serde(default = "Config::default_currency")]
    pub currency: String,

    /// Categories offered by the entry form. Free text is still accepted
    /// from imports, so this is a convenience list, not a constraint.
    #[serde(default = "Config::default_categories")]
    pub categories: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the transaction snapshot. Defaults to
    /// `data/` under the application base directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            categories: Self::default_categories(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_categories() -> Vec<String> {
        ["Job", "Food", "Rent", "Utilities", "Entertainment", "Other"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|category| category == label)
    }
}

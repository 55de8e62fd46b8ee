#![doc(test(attr(deny(warnings))))]

//! Tallybook keeps a local ledger of income and expense transactions, with
//! running totals, per-category expense breakdowns, and JSON import/export.

pub mod cli;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("tallybook=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

//! tally-domain
//!
//! Pure domain models (Ledger, Transaction, category filters).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod ledger;
pub mod transaction;

pub use ledger::*;
pub use transaction::*;

//! tally-core
//!
//! Business logic and services for Tallybook.
//! Depends on tally-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod error;
pub mod interchange;
pub mod storage;
pub mod summary_service;
pub mod transaction_service;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use interchange::*;
pub use storage::*;
pub use summary_service::*;
pub use transaction_service::*;

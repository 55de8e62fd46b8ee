pub mod chart;
pub mod commands;
pub mod core;
pub mod forms;
pub mod output;
pub mod registry;
pub mod shell;
pub mod shell_context;

pub use shell::run_cli;

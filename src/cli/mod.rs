pub mod commands;
pub mod core;
pub mod forms;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod views;

pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};

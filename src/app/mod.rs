//! Application layer: subcommands, the interactive loop, and user-facing
//! output.

mod commands;
mod interactive;
mod output;
mod session;
pub mod statistics;

pub use commands::run;
pub use interactive::run_interactive;
pub use output::{format_history_entry, format_result};
pub use session::{Session, Tracked};
pub use statistics::print_error_statistics;

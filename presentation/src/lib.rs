//! Presentation layer for petmatch
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, FilterArgs, OutputFormatArg};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::formatter_for;
pub use output::json::JsonFormatter;
pub use progress::reporter::{NoticeOnly, ProgressReporter};
pub use quiz::{QuizBoard, QuizRepl};

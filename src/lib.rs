//! RegExplorer - an interactive regular expression tester
//!
//! A Rust based terminal user interface (TUI) that highlights every match of a
//! pattern in a text, lists the matches with their line and column, and lets
//! the user step through them

pub mod cli;
pub mod constants;
pub mod document;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod matcher;
pub mod tui;
pub mod validation;

// Re-export `Cli` for use from `main`
pub use cli::Cli;
pub use error::{RegexplorerError, Result};
pub use highlight::Highlighter;

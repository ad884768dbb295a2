//! Command system for the command bar.
//!
//! This module handles all aspects of the command line:
//! - Registry: command specs and metadata (registry.rs)
//! - Parsing: tokenizing and validating command input (parse.rs)
//! - Execution: running commands against the session (exec/)
//!
//! Commands follow a `verb [argument]` pattern, e.g. `cd gamejams` or
//! `open 2`. The registry provides completion, hints and help text.

mod exec;
mod parse;
mod registry;

pub use exec::execute_line;
pub use parse::complete_command_input;
pub use registry::command_hint_lines;

//! Command-line interface for met-gallery.
//!
//! Loads a random gallery from the collection API and prints it, either
//! once or with interactive category filtering.

mod commands;

pub use commands::{Cli, run_command};

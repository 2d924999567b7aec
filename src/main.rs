//! Met Gallery - a random artwork gallery from the Met collection API.
//!
//! Draws a handful of objects at random, keeps those with an image and
//! prints them, optionally filtered by category.

pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod gallery;
pub mod view;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr, the gallery goes to stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("met_gallery=info".parse()?))
        .init();

    cli::run_command(&args)
}

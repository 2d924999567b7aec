//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `show`: load a gallery once and print it
//! - `browse`: load a gallery and filter it interactively

mod browse;
mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::{Builder, Runtime};

use crate::collection::CollectionClient;
use crate::config::{self, Config};
use crate::error::ResultExt;
use crate::gallery::{Category, GalleryLoader, GalleryMessage, GalleryState};
use crate::view;

pub use browse::cmd_browse;
pub use show::cmd_show;

/// Met Gallery CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Collection API base URL (overrides the config file)
    #[arg(long, global = true, env = "MET_GALLERY_BASE_URL")]
    pub base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Load a random gallery and print it (default)
    Show {
        /// Category to show: All, Paintings, Sculptures or Drawings
        #[arg(short, long, value_parser = Category::parse_option)]
        category: Option<Category>,
        /// Number of objects to draw
        #[arg(short = 'n', long, value_parser = parse_sample_size)]
        sample_size: Option<usize>,
    },
    /// Load a random gallery, then pick and apply categories from stdin
    Browse {
        /// Number of objects to draw
        #[arg(short = 'n', long, value_parser = parse_sample_size)]
        sample_size: Option<usize>,
    },
    /// List the selectable categories
    Categories,
}

/// Settings resolved from the config file and command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub sample_size: usize,
    pub category: Category,
}

impl Settings {
    /// Flags win over the config file
    pub fn resolve(
        config: &Config,
        base_url: Option<&str>,
        sample_size: Option<usize>,
        category: Option<Category>,
    ) -> Self {
        Self {
            base_url: base_url
                .map(str::to_string)
                .unwrap_or_else(|| config.api.base_url.clone()),
            sample_size: sample_size.unwrap_or(config.gallery.sample_size),
            category: category.unwrap_or_else(|| config.gallery.default_category()),
        }
    }
}

/// Run the specified CLI command. No subcommand means `show`.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load(),
    };

    // One batch of requests per load: a single-threaded runtime is enough
    let rt = Builder::new_current_thread().enable_all().build()?;

    match &cli.command {
        Some(Commands::Show {
            category,
            sample_size,
        }) => {
            let settings = Settings::resolve(
                &config,
                cli.base_url.as_deref(),
                *sample_size,
                category.clone(),
            );
            cmd_show(&rt, &settings)
        }
        Some(Commands::Browse { sample_size }) => {
            let settings =
                Settings::resolve(&config, cli.base_url.as_deref(), *sample_size, None);
            cmd_browse(&rt, &settings)
        }
        Some(Commands::Categories) => {
            for option in Category::OPTIONS {
                println!("{}", option);
            }
            Ok(())
        }
        None => {
            let settings = Settings::resolve(&config, cli.base_url.as_deref(), None, None);
            cmd_show(&rt, &settings)
        }
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Load a fresh gallery with the given settings.
///
/// Load failures are not returned: they leave the gallery empty.
pub(crate) fn load_gallery(rt: &Runtime, settings: &Settings) -> anyhow::Result<GalleryState> {
    let client = CollectionClient::with_base_url(&settings.base_url)
        .with_context("creating collection client")?;

    tracing::info!("Loading gallery from {}", client.base_url());

    let mut state = GalleryState::with_category(settings.category.clone());
    print!("{}", view::render_gallery(&state));

    let result = rt.block_on(
        GalleryLoader::new(&client)
            .sample_size(settings.sample_size)
            .load(&mut rand::rng()),
    );
    state.update(GalleryMessage::Loaded(result));
    tracing::debug!(
        "Gallery {:?} with {} records",
        state.phase(),
        state.records().len()
    );

    Ok(state)
}

fn parse_sample_size(input: &str) -> Result<usize, String> {
    match input.parse::<usize>() {
        Ok(0) => Err("sample size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

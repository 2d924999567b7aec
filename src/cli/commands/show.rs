//! One-shot gallery command.

use tokio::runtime::Runtime;

use super::{Settings, load_gallery};
use crate::view;

/// Load a random gallery, print it and exit
pub fn cmd_show(rt: &Runtime, settings: &Settings) -> anyhow::Result<()> {
    let state = load_gallery(rt, settings)?;
    println!("{}", view::render(&state));
    Ok(())
}

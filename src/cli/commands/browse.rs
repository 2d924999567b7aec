//! Interactive gallery command.
//!
//! Reads one line at a time:
//! - a category name selects it
//! - an empty line applies the selection
//! - `q` or `quit` exits

use std::io::{BufRead, Write};
use tokio::runtime::Runtime;

use super::{Settings, load_gallery};
use crate::error::{self, ResultExt};
use crate::gallery::{Category, GalleryMessage, GalleryState};
use crate::view;

/// Load a random gallery, then filter it from stdin
pub fn cmd_browse(rt: &Runtime, settings: &Settings) -> anyhow::Result<()> {
    let mut state = load_gallery(rt, settings)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", view::render(&state))?;
    writeln!(
        stdout,
        "Type a category to select it, Enter to filter results, q to quit."
    )?;

    browse_loop(&mut state, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Feed input lines into the gallery until `quit` or end of input
pub fn browse_loop<R: BufRead, W: Write>(
    state: &mut GalleryState,
    input: R,
    out: &mut W,
) -> error::Result<()> {
    for line in input.lines() {
        let line = line.with_context("reading category")?;
        let line = line.trim();

        match line {
            "q" | "quit" => break,
            "" => {
                state.update(GalleryMessage::ApplyFilter);
                write!(out, "{}\n{}", view::render_filter(state), view::render_gallery(state))?;
            }
            choice => match Category::from_option(choice) {
                Some(category) => {
                    state.update(GalleryMessage::CategorySelected(category));
                    write!(out, "{}", view::render_filter(state))?;
                }
                None => {
                    let names = Category::OPTIONS.map(|option| option.name().to_string());
                    writeln!(out, "Unknown category '{}'. Choose one of: {}", choice, names.join(", "))?;
                }
            },
        }
        out.flush()?;
    }
    Ok(())
}

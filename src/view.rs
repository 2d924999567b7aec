//! Plain-text rendering of a gallery.
//!
//! Display fallbacks for missing fields live here and only here.

use crate::collection::Artwork;
use crate::gallery::{Category, GalleryState};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No artworks found.";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";
pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN: &str = "Unknown";

const INTRO: [&str; 4] = [
    "This gallery uses the Metropolitan Museum of Art collection API.",
    "A few works are drawn at random and only those with an image are shown.",
    "If none of the drawn works has an image, the gallery is empty.",
    "Run again to see other works.",
];

/// Intro text shown above the gallery
pub fn render_header() -> String {
    let mut out = String::from("Hi!\n");
    for line in INTRO {
        out.push_str("  * ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// The category control: options with the selected one marked
pub fn render_filter(state: &GalleryState) -> String {
    let options: Vec<String> = Category::OPTIONS
        .iter()
        .map(|option| {
            if option == state.pending_category() {
                format!("[{}]", option)
            } else {
                option.to_string()
            }
        })
        .collect();

    let mut out = format!("Choose a category: {}\n", options.join(" | "));
    if state.pending_category() != state.applied_category() {
        out.push_str("(press Enter to filter results)\n");
    }
    out
}

/// Gallery body: loading notice, empty notice, or one block per artwork
pub fn render_gallery(state: &GalleryState) -> String {
    if state.is_loading() {
        return format!("{}\n", LOADING_MESSAGE);
    }

    let visible = state.visible_artworks();
    if visible.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut out = format!("Showing {} ({}):\n\n", state.applied_category(), visible.len());
    for art in visible {
        out.push_str(&render_artwork(art));
        out.push('\n');
    }
    out
}

/// Header, filter control and gallery
pub fn render(state: &GalleryState) -> String {
    format!(
        "{}\n{}\n{}",
        render_header(),
        render_filter(state),
        render_gallery(state)
    )
}

fn render_artwork(art: &Artwork) -> String {
    let mut out = format!(
        "{}\n  Artist: {}\n  Year: {}\n",
        art.title.as_deref().unwrap_or(UNTITLED),
        art.artist_display_name.as_deref().unwrap_or(UNKNOWN),
        art.object_date.as_deref().unwrap_or(UNKNOWN)
    );
    if let Some(dept) = &art.department {
        out.push_str(&format!("  Department: {}\n", dept));
    }
    out.push_str(&format!(
        "  Image: {}\n",
        art.primary_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    ));
    out
}

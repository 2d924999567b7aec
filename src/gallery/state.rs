//! Gallery state and its transitions.
//!
//! All changes go through [`GalleryState::update`], fed by two kinds of
//! events: the pipeline finishing and the user picking/applying a category.

use super::filter::{self, Category};
use crate::collection::{Artwork, CollectionError};

/// Loading phase of a gallery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GalleryPhase {
    #[default]
    Loading,
    /// Records arrived (possibly none with an image)
    Ready,
    /// Loading failed; renders like an empty gallery
    Failed,
}

/// Events that change the gallery
#[derive(Debug, Clone)]
pub enum GalleryMessage {
    /// The loading pipeline finished
    Loaded(Result<Vec<Artwork>, CollectionError>),
    /// The user picked a category (not applied yet)
    CategorySelected(Category),
    /// The user applied the picked category
    ApplyFilter,
}

/// State of one gallery session
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    phase: GalleryPhase,
    records: Vec<Artwork>,
    pending_category: Category,
    applied_category: Category,
}

impl GalleryState {
    /// Fresh gallery, loading, with no filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh gallery starting with `category` selected and applied
    pub fn with_category(category: Category) -> Self {
        Self {
            pending_category: category.clone(),
            applied_category: category,
            ..Self::new()
        }
    }

    /// Apply an event
    pub fn update(&mut self, message: GalleryMessage) {
        match message {
            GalleryMessage::Loaded(result) => {
                if self.phase != GalleryPhase::Loading {
                    tracing::debug!("Ignoring load result, gallery already {:?}", self.phase);
                    return;
                }
                match result {
                    Ok(artworks) => {
                        // Loaders already filter, but the invariant is ours to keep
                        self.records = filter::with_images(artworks);
                        self.phase = GalleryPhase::Ready;
                    }
                    Err(e) => {
                        tracing::error!("Error fetching artworks: {}", e);
                        self.records.clear();
                        self.phase = GalleryPhase::Failed;
                    }
                }
            }
            GalleryMessage::CategorySelected(category) => {
                self.pending_category = category;
            }
            GalleryMessage::ApplyFilter => {
                if self.is_loading() {
                    tracing::debug!("Ignoring filter while loading");
                    return;
                }
                self.applied_category = self.pending_category.clone();
            }
        }
    }

    pub fn phase(&self) -> GalleryPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == GalleryPhase::Loading
    }

    /// Every record with an image, regardless of category
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    pub fn pending_category(&self) -> &Category {
        &self.pending_category
    }

    pub fn applied_category(&self) -> &Category {
        &self.applied_category
    }

    /// Records visible under the applied category
    pub fn visible_artworks(&self) -> Vec<&Artwork> {
        filter::by_category(&self.records, &self.applied_category)
    }
}

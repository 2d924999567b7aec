//! Internal domain models for collection objects.
//!
//! These types are OUR types - they don't change when the museum API changes.
//! All API responses get converted into these types via the adapter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of an object in the collection
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ObjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An artwork record as used by the gallery.
///
/// Every attribute may be absent. Display fallbacks ("Untitled", "Unknown")
/// belong to the view, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artwork {
    /// Identifier the record was fetched with
    pub object_id: ObjectId,
    /// URL of the main image
    pub primary_image: Option<String>,
    /// Title of the work
    pub title: Option<String>,
    /// Artist name as displayed by the museum
    pub artist_display_name: Option<String>,
    /// Free-form date ("ca. 1665", "1890-91", ...)
    pub object_date: Option<String>,
    /// Curatorial department, used as the category
    pub department: Option<String>,
}

impl Artwork {
    /// Whether the record carries a usable image URL
    pub fn has_image(&self) -> bool {
        self.primary_image.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Errors that can occur while talking to the collection API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No object IDs returned by the collection")]
    EmptyIdList,

    #[error("Cannot sample from an empty ID list")]
    EmptySource,
}

//! Met Collection API Data Transfer Objects
//!
//! These types match what the collection API returns.
//! DO NOT use these types outside the collection module - convert to domain types.
//!
//! API Reference: https://metmuseum.github.io/
//!
//! Example object response (abridged):
//! ```json
//! {
//!   "objectID": 436535,
//!   "primaryImage": "https://images.metmuseum.org/CRDImages/ep/original/DT1502_cropped2.jpg",
//!   "department": "European Paintings",
//!   "title": "Wheat Field with Cypresses",
//!   "artistDisplayName": "Vincent van Gogh",
//!   "objectDate": "1889"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Response of `GET /objects`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObjectsResponse {
    /// Number of objects in the collection
    #[serde(default)]
    pub total: u64,
    /// All object identifiers. The API sends `null` when nothing matches.
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<u64>>,
}

/// Response of `GET /objects/{id}`
///
/// The API uses empty strings for missing values, but fields may also be
/// missing or `null` entirely, so everything is optional here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectResponse {
    #[serde(rename = "objectID")]
    pub object_id: Option<u64>,
    pub primary_image: Option<String>,
    pub title: Option<String>,
    pub artist_display_name: Option<String>,
    pub object_date: Option<String>,
    pub department: Option<String>,
}

/// Error body returned for unknown objects (`{"message": "ObjectID not found"}`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

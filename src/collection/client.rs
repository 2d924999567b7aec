//! Met Collection HTTP client
//!
//! Read-only, unauthenticated access to the museum's public collection API.
//! See: https://metmuseum.github.io/

use super::{adapter, dto};
use crate::collection::domain::{Artwork, CollectionError, ObjectId};

/// Public endpoint of the collection API
pub const DEFAULT_BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// User agent string sent with every request
const USER_AGENT: &str = concat!("MetGallery/", env!("CARGO_PKG_VERSION"));

/// Collection API client
pub struct CollectionClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CollectionClient {
    /// Create a client for the public API
    pub fn new() -> Result<Self, CollectionError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (mirrors, local fixtures)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, CollectionError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CollectionError::Transport(e.to_string()))?;

        let base_url: String = base_url.into();
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every object identifier in the collection
    pub async fn object_ids(&self) -> Result<Vec<ObjectId>, CollectionError> {
        let url = self.objects_url();
        tracing::debug!("Fetching object IDs from {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CollectionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(http_error(status));
        }

        let body = response
            .json::<dto::ObjectsResponse>()
            .await
            .map_err(|e| CollectionError::Parse(e.to_string()))?;

        let ids = adapter::to_object_ids(body)?;
        tracing::debug!("Collection returned {} object IDs", ids.len());
        Ok(ids)
    }

    /// Fetch a single object record.
    ///
    /// Unknown objects (404 with the API's JSON message) come back as a
    /// record without any fields, so they are dropped later like any other
    /// record without an image. A 404 with any other body is a parse error.
    pub async fn object(&self, id: ObjectId) -> Result<Artwork, CollectionError> {
        let url = self.object_url(id);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CollectionError::Transport(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            let body = response
                .json::<dto::ApiMessage>()
                .await
                .map_err(|e| CollectionError::Parse(e.to_string()))?;
            tracing::debug!("Object {}: {}", id, body.message);
            return Ok(adapter::to_artwork(id, dto::ObjectResponse::default()));
        }

        if !status.is_success() {
            return Err(http_error(status));
        }

        let body = response
            .json::<dto::ObjectResponse>()
            .await
            .map_err(|e| CollectionError::Parse(e.to_string()))?;

        Ok(adapter::to_artwork(id, body))
    }

    fn objects_url(&self) -> String {
        format!("{}/objects", self.base_url)
    }

    fn object_url(&self, id: ObjectId) -> String {
        format!("{}/objects/{}", self.base_url, id)
    }
}

fn http_error(status: reqwest::StatusCode) -> CollectionError {
    // StatusCode's Display already carries the reason phrase
    CollectionError::Transport(format!("HTTP {}", status))
}

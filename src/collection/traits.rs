//! Trait definition for the collection API.
//!
//! The gallery pipeline only talks to [`CollectionApi`], so tests can
//! substitute a mock for the real HTTP client.

use async_trait::async_trait;

use super::client::CollectionClient;
use super::domain::{Artwork, CollectionError, ObjectId};

/// Read access to a museum collection.
#[async_trait]
pub trait CollectionApi: Send + Sync {
    /// List every object identifier in the collection.
    async fn object_ids(&self) -> Result<Vec<ObjectId>, CollectionError>;

    /// Fetch the record of a single object.
    async fn object(&self, id: ObjectId) -> Result<Artwork, CollectionError>;
}

#[async_trait]
impl CollectionApi for CollectionClient {
    async fn object_ids(&self) -> Result<Vec<ObjectId>, CollectionError> {
        CollectionClient::object_ids(self).await
    }

    async fn object(&self, id: ObjectId) -> Result<Artwork, CollectionError> {
        CollectionClient::object(self, id).await
    }
}

//! Gallery loading pipeline
//!
//! 1. Fetch every object ID from the collection
//! 2. Sample a fixed number of them at random
//! 3. Fetch all sampled records concurrently (fail-fast)
//! 4. Keep only records that have an image

use futures::future::try_join_all;
use rand::Rng;

use super::filter;
use super::sampler::{self, DEFAULT_SAMPLE_SIZE};
use crate::collection::{Artwork, CollectionApi, CollectionError, ObjectId};

/// Loads a fresh random gallery from a collection
pub struct GalleryLoader<'a, A: CollectionApi + ?Sized> {
    api: &'a A,
    sample_size: usize,
}

impl<'a, A: CollectionApi + ?Sized> GalleryLoader<'a, A> {
    /// Loader drawing the default number of objects
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }

    /// Change how many objects are drawn
    pub fn sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Run the whole pipeline once.
    ///
    /// The returned artworks all have an image; the list may be empty.
    pub async fn load<R: Rng>(&self, rng: &mut R) -> Result<Vec<Artwork>, CollectionError> {
        let ids = self.api.object_ids().await?;
        let sample = sampler::sample_ids(&ids, self.sample_size, rng)?;
        tracing::info!(
            "Sampled {} of {} objects: {:?}",
            sample.len(),
            ids.len(),
            sample.iter().map(|id| id.0).collect::<Vec<_>>()
        );

        let records = fetch_records(self.api, &sample).await?;
        let fetched = records.len();
        let artworks = filter::with_images(records);
        tracing::info!("{} of {} records have an image", artworks.len(), fetched);

        Ok(artworks)
    }
}

/// Fetch one record per identifier concurrently.
///
/// Results keep the order of `ids`. The first failure fails the batch.
pub async fn fetch_records<A: CollectionApi + ?Sized>(
    api: &A,
    ids: &[ObjectId],
) -> Result<Vec<Artwork>, CollectionError> {
    try_join_all(ids.iter().map(|&id| api.object(id))).await
}

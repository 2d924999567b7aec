//! Random selection of object identifiers.

use rand::Rng;

use crate::collection::{CollectionError, ObjectId};

/// Number of identifiers drawn per load
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Draw `count` identifiers uniformly at random, with replacement.
///
/// Duplicates are possible and kept.
pub fn sample_ids<R: Rng>(
    ids: &[ObjectId],
    count: usize,
    rng: &mut R,
) -> Result<Vec<ObjectId>, CollectionError> {
    if ids.is_empty() {
        return Err(CollectionError::EmptySource);
    }

    Ok((0..count)
        .map(|_| ids[rng.random_range(0..ids.len())])
        .collect())
}

//! The random gallery: sampling, loading, filtering and session state.
//!
//! ```ignore
//! let client = CollectionClient::new()?;
//! let mut state = GalleryState::new();
//!
//! let result = GalleryLoader::new(&client).load(&mut rand::rng()).await;
//! state.update(GalleryMessage::Loaded(result));
//!
//! state.update(GalleryMessage::CategorySelected(Category::Paintings));
//! state.update(GalleryMessage::ApplyFilter);
//! for art in state.visible_artworks() { /* ... */ }
//! ```

pub mod filter;
pub mod pipeline;
pub mod sampler;
pub mod state;

pub use filter::Category;
pub use pipeline::{GalleryLoader, fetch_records};
pub use sampler::{DEFAULT_SAMPLE_SIZE, sample_ids};
pub use state::{GalleryMessage, GalleryPhase, GalleryState};

#[cfg(test)]
mod scenario_tests {
    //! End-to-end runs of loader + state against a mock collection.

    use super::*;
    use crate::collection::CollectionError;
    use crate::collection::traits::mocks::{MockCollection, artwork, imageless};
    use crate::view;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    async fn run(mock: &MockCollection, sample_size: usize) -> GalleryState {
        let mut state = GalleryState::new();
        let result = GalleryLoader::new(mock)
            .sample_size(sample_size)
            .load(&mut StdRng::seed_from_u64(99))
            .await;
        state.update(GalleryMessage::Loaded(result));
        state
    }

    #[tokio::test]
    async fn three_ids_all_with_images() {
        let mock = MockCollection::with_ids(vec![1, 2, 3])
            .record(artwork(1, Some("Paintings")))
            .record(artwork(2, Some("Sculptures")))
            .record(artwork(3, Some("Drawings")));

        let state = run(&mock, 3).await;

        assert!(!state.is_loading());
        assert_eq!(state.visible_artworks().len(), 3);
    }

    #[tokio::test]
    async fn three_ids_default_sample_keeps_duplicates() {
        let mock = MockCollection::with_ids(vec![1, 2, 3])
            .record(artwork(1, Some("Paintings")))
            .record(artwork(2, Some("Sculptures")))
            .record(artwork(3, Some("Drawings")));

        let state = run(&mock, DEFAULT_SAMPLE_SIZE).await;

        // Sampling is with replacement, so three ids still fill the sample
        assert!(!state.is_loading());
        assert_eq!(mock.record_calls(), DEFAULT_SAMPLE_SIZE);
        assert_eq!(state.visible_artworks().len(), DEFAULT_SAMPLE_SIZE);
    }

    #[tokio::test]
    async fn empty_id_list_renders_empty_gallery() {
        let mock = MockCollection::with_index_error(CollectionError::EmptyIdList);

        let state = run(&mock, DEFAULT_SAMPLE_SIZE).await;

        assert!(!state.is_loading());
        assert!(state.records().is_empty());
        assert!(view::render(&state).contains(view::EMPTY_MESSAGE));
    }

    #[tokio::test]
    async fn sculptures_filter_over_two_images() {
        let mut records = vec![artwork(1, Some("Paintings")), artwork(2, Some("Drawings"))];
        records.extend((3..=10).map(|id| imageless(id, Some("Sculptures"))));
        let mock = MockCollection::with_ids((1..=10).collect()).sequence(records);

        let mut state = run(&mock, DEFAULT_SAMPLE_SIZE).await;
        assert_eq!(state.records().len(), 2);

        state.update(GalleryMessage::CategorySelected(Category::Sculptures));
        state.update(GalleryMessage::ApplyFilter);

        assert!(state.visible_artworks().is_empty());
        assert!(view::render(&state).contains(view::EMPTY_MESSAGE));
    }

    #[tokio::test]
    async fn one_failed_fetch_shows_nothing() {
        let mock = MockCollection::with_ids((1..=10).collect())
            .sequence((1..=10).map(|id| artwork(id, None)).collect())
            .failing_on(6);

        let state = run(&mock, DEFAULT_SAMPLE_SIZE).await;

        assert_eq!(state.phase(), GalleryPhase::Failed);
        assert!(!state.is_loading());
        assert!(state.visible_artworks().is_empty());
        assert!(view::render(&state).contains(view::EMPTY_MESSAGE));
    }
}

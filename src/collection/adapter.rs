//! Adapter layer: Convert collection DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::collection::domain::{Artwork, CollectionError, ObjectId};

/// Convert the index response into the list of object identifiers.
///
/// A missing, `null` or empty `objectIDs` field is an error: there is
/// nothing to sample from.
pub fn to_object_ids(response: dto::ObjectsResponse) -> Result<Vec<ObjectId>, CollectionError> {
    tracing::debug!("Collection reports {} objects", response.total);
    match response.object_ids {
        Some(ids) if !ids.is_empty() => Ok(ids.into_iter().map(ObjectId).collect()),
        _ => Err(CollectionError::EmptyIdList),
    }
}

/// Convert an object response into an artwork.
///
/// `requested` is the identifier the record was fetched with; it wins over
/// the one in the body, which may be missing.
pub fn to_artwork(requested: ObjectId, response: dto::ObjectResponse) -> Artwork {
    if let Some(id) = response.object_id
        && id != requested.0
    {
        tracing::debug!("Object {} answered with objectID {}", requested, id);
    }

    Artwork {
        object_id: requested,
        primary_image: non_empty(response.primary_image),
        title: non_empty(response.title),
        artist_display_name: non_empty(response.artist_display_name),
        object_date: non_empty(response.object_date),
        department: non_empty(response.department),
    }
}

/// The API uses "" for missing values; treat those as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ids_converted() {
        let response = dto::ObjectsResponse {
            total: 3,
            object_ids: Some(vec![1, 2, 3]),
        };

        let ids = to_object_ids(response).unwrap();
        assert_eq!(ids, vec![ObjectId(1), ObjectId(2), ObjectId(3)]);
    }

    #[test]
    fn test_empty_object_ids_is_error() {
        let response = dto::ObjectsResponse {
            total: 0,
            object_ids: Some(vec![]),
        };
        assert_eq!(to_object_ids(response), Err(CollectionError::EmptyIdList));
    }

    #[test]
    fn test_null_object_ids_is_error() {
        let response = dto::ObjectsResponse {
            total: 0,
            object_ids: None,
        };
        assert_eq!(to_object_ids(response), Err(CollectionError::EmptyIdList));
    }

    #[test]
    fn test_blank_fields_become_absent() {
        let response = dto::ObjectResponse {
            object_id: Some(7),
            primary_image: Some(String::new()),
            title: Some("Bowl".to_string()),
            artist_display_name: Some("  ".to_string()),
            object_date: None,
            department: Some("Asian Art".to_string()),
        };

        let art = to_artwork(ObjectId(7), response);

        assert_eq!(art.object_id, ObjectId(7));
        assert!(art.primary_image.is_none());
        assert_eq!(art.title.as_deref(), Some("Bowl"));
        assert!(art.artist_display_name.is_none());
        assert!(art.object_date.is_none());
        assert_eq!(art.department.as_deref(), Some("Asian Art"));
    }

    #[test]
    fn test_requested_id_is_kept() {
        let art = to_artwork(ObjectId(42), dto::ObjectResponse::default());
        assert_eq!(art.object_id, ObjectId(42));
        assert!(!art.has_image());
    }
}

//! Gallery filters: image presence and category.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::collection::Artwork;

/// A gallery category.
///
/// `All` is the sentinel meaning "no filtering". Department names the
/// collection returns that are not one of the fixed options end up in
/// `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Paintings,
    Sculptures,
    Drawings,
    Other(String),
}

impl Category {
    /// Options offered to the user, in display order
    pub const OPTIONS: [Category; 4] = [
        Category::All,
        Category::Paintings,
        Category::Sculptures,
        Category::Drawings,
    ];

    /// Name compared against departments and shown to the user
    pub fn name(&self) -> &str {
        match self {
            Category::All => "All",
            Category::Paintings => "Paintings",
            Category::Sculptures => "Sculptures",
            Category::Drawings => "Drawings",
            Category::Other(name) => name,
        }
    }

    /// Match user input against the selectable options (case-insensitive).
    pub fn from_option(input: &str) -> Option<Category> {
        let input = input.trim();
        Self::OPTIONS
            .into_iter()
            .find(|option| option.name().eq_ignore_ascii_case(input))
    }

    /// Parser for clap arguments restricted to the selectable options
    pub fn parse_option(input: &str) -> Result<Category, String> {
        Self::from_option(input).ok_or_else(|| {
            let names = Self::OPTIONS.map(|option| option.name().to_string());
            format!("unknown category '{}', expected one of: {}", input, names.join(", "))
        })
    }

    /// Whether an artwork is visible under this category
    pub fn matches(&self, artwork: &Artwork) -> bool {
        match self {
            Category::All => true,
            other => artwork
                .department
                .as_deref()
                .is_some_and(|dept| dept.to_lowercase() == other.name().to_lowercase()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any literal parses. Only the exact string "All" is the sentinel;
/// the named options are recognised case-sensitively too.
impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "All" => Category::All,
            "Paintings" => Category::Paintings,
            "Sculptures" => Category::Sculptures,
            "Drawings" => Category::Drawings,
            other => Category::Other(other.to_string()),
        })
    }
}

/// Keep only artworks that have an image.
pub fn with_images(artworks: Vec<Artwork>) -> Vec<Artwork> {
    artworks.into_iter().filter(Artwork::has_image).collect()
}

/// Artworks visible under `category`, in their original order.
pub fn by_category<'a>(artworks: &'a [Artwork], category: &Category) -> Vec<&'a Artwork> {
    artworks.iter().filter(|art| category.matches(art)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::traits::mocks::{artwork, imageless};

    #[test]
    fn test_with_images_drops_missing_and_empty() {
        let mut blank = artwork(3, None);
        blank.primary_image = Some(String::new());

        let kept = with_images(vec![artwork(1, None), imageless(2, None), blank, artwork(4, None)]);

        let ids: Vec<u64> = kept.iter().map(|a| a.object_id.0).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_with_images_may_be_empty() {
        assert!(with_images(vec![imageless(1, None), imageless(2, None)]).is_empty());
    }

    #[test]
    fn test_all_matches_everything() {
        let records = vec![artwork(1, Some("Paintings")), artwork(2, None)];
        assert_eq!(by_category(&records, &Category::All).len(), 2);
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let records = vec![
            artwork(1, Some("PAINTINGS")),
            artwork(2, Some("paintings")),
            artwork(3, Some("European Paintings")),
        ];

        let visible = by_category(&records, &Category::Paintings);
        let ids: Vec<u64> = visible.iter().map(|a| a.object_id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_absent_department_never_matches() {
        let records = vec![artwork(1, None)];
        assert!(by_category(&records, &Category::Drawings).is_empty());
        assert!(by_category(&records, &Category::Other(String::new())).is_empty());
    }

    #[test]
    fn test_other_category_matches_department() {
        let records = vec![artwork(1, Some("Arms and Armor")), artwork(2, Some("Asian Art"))];
        let category: Category = "arms and armor".parse().unwrap();

        let visible = by_category(&records, &category);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].object_id.0, 1);
    }

    #[test]
    fn test_lowercase_all_is_not_sentinel() {
        let category: Category = "all".parse().unwrap();
        assert_eq!(category, Category::Other("all".to_string()));

        let records = vec![artwork(1, Some("Paintings"))];
        assert!(by_category(&records, &category).is_empty());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Category::from_option("sculptures"), Some(Category::Sculptures));
        assert_eq!(Category::from_option(" All "), Some(Category::All));
        assert_eq!(Category::from_option("Armor"), None);
    }

    #[test]
    fn test_parse_option_error_lists_choices() {
        let err = Category::parse_option("Textiles").unwrap_err();
        assert!(err.contains("Textiles"));
        assert!(err.contains("Paintings"));
    }

    #[test]
    fn test_display_round_trips_options() {
        for option in Category::OPTIONS {
            let parsed: Category = option.to_string().parse().unwrap();
            assert_eq!(parsed, option);
        }
    }
}

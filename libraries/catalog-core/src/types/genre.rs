//! Genre types

use super::GenreId;
use serde::{Deserialize, Serialize};

/// URL prefix every genre detail page lives under
pub const GENRE_URL_PREFIX: &str = "/catalog/genre/";

/// A named category of books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Unique identifier
    pub id: GenreId,
    /// Display name, HTML-escaped at validation time
    pub name: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl Genre {
    /// Canonical URL of the genre's detail page
    ///
    /// ```
    /// use catalog_core::{Genre, GenreId};
    ///
    /// let genre = Genre {
    ///     id: GenreId::new("42"),
    ///     name: "Rock &amp; Roll".to_string(),
    ///     created_at: "2025-01-01T00:00:00Z".to_string(),
    /// };
    /// assert_eq!(genre.url(), "/catalog/genre/42");
    /// ```
    pub fn url(&self) -> String {
        format!("{}{}", GENRE_URL_PREFIX, self.id)
    }
}

/// Data for creating a new genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGenre {
    /// Sanitized name
    pub name: String,
}

//! Storage trait for the catalog

use crate::error::Result;
use crate::types::{Book, BookSummary, CreateBook, CreateGenre, Genre, GenreId};
use async_trait::async_trait;

/// Catalog record store
///
/// Request handlers receive an implementation of this trait instead of
/// reaching for a global connection, so they run the same against `SQLite`
/// and against in-memory fakes. Lookups report "no match" as `None` or an
/// empty `Vec`, never as an error.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // ========================================================================
    // Genres
    // ========================================================================

    /// Get all genres ordered by name (ordinal comparison)
    async fn list_genres(&self) -> Result<Vec<Genre>>;

    /// Get genre by ID
    async fn get_genre(&self, id: &GenreId) -> Result<Option<Genre>>;

    /// Find a genre whose name collates equal to `name`
    ///
    /// See [`crate::collation`] for the comparison rules.
    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>>;

    /// Create a new genre, assigning its identifier
    ///
    /// Fails with [`crate::CatalogError::Duplicate`] when a genre with a
    /// collation-equal name already exists.
    async fn create_genre(&self, genre: CreateGenre) -> Result<Genre>;

    /// Rename an existing genre in place
    ///
    /// Fails with [`crate::CatalogError::NotFound`] when the genre does not
    /// exist and [`crate::CatalogError::Duplicate`] when another genre already
    /// uses a collation-equal name.
    async fn update_genre_name(&self, id: &GenreId, name: &str) -> Result<Genre>;

    /// Delete a genre, returning whether a record was removed
    ///
    /// Fails with [`crate::CatalogError::Referenced`] while books still point
    /// at the genre.
    async fn delete_genre(&self, id: &GenreId) -> Result<bool>;

    // ========================================================================
    // Books
    // ========================================================================

    /// Get the title/summary projection of every book in a genre
    async fn get_books_by_genre(&self, genre_id: &GenreId) -> Result<Vec<BookSummary>>;

    /// Create a new book
    async fn create_book(&self, book: CreateBook) -> Result<Book>;
}

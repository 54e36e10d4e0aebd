//! Book types
//!
//! Books are owned by another part of the catalog; genre pages only read them.

use super::{BookId, GenreId};
use serde::{Deserialize, Serialize};

/// A catalog book referencing a single genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier
    pub id: BookId,
    /// Book title
    pub title: String,
    /// Short description
    pub summary: String,
    /// Genre the book is filed under
    pub genre_id: GenreId,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl Book {
    /// Canonical URL of the book's detail page
    pub fn url(&self) -> String {
        book_url(&self.id)
    }
}

/// Title and summary projection used when listing a genre's books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    /// Unique identifier
    pub id: BookId,
    /// Book title
    pub title: String,
    /// Short description
    pub summary: String,
}

impl BookSummary {
    /// Same URL as [`Book::url`]
    pub fn url(&self) -> String {
        book_url(&self.id)
    }
}

impl From<Book> for BookSummary {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            summary: book.summary,
        }
    }
}

/// Data for creating a new book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBook {
    /// Book title
    pub title: String,
    /// Short description
    pub summary: String,
    /// Genre to file the book under
    pub genre_id: GenreId,
}

fn book_url(id: &BookId) -> String {
    format!("/catalog/book/{}", id)
}

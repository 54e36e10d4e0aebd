//! Domain types

mod book;
mod genre;
mod ids;

pub use book::{Book, BookSummary, CreateBook};
pub use genre::{CreateGenre, Genre, GENRE_URL_PREFIX};
pub use ids::{BookId, GenreId};

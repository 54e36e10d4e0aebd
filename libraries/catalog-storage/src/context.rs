use crate::{books, genres};
use async_trait::async_trait;
use catalog_core::{error::Result, storage::CatalogStore, types::*};
use sqlx::SqlitePool;

/// Catalog store backed by `SQLite`
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    // Genres
    async fn list_genres(&self) -> Result<Vec<Genre>> {
        genres::get_all(&self.pool).await
    }

    async fn get_genre(&self, id: &GenreId) -> Result<Option<Genre>> {
        genres::get_by_id(&self.pool, id).await
    }

    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>> {
        genres::find_by_name(&self.pool, name).await
    }

    async fn create_genre(&self, genre: CreateGenre) -> Result<Genre> {
        genres::create(&self.pool, genre).await
    }

    async fn update_genre_name(&self, id: &GenreId, name: &str) -> Result<Genre> {
        genres::update_name(&self.pool, id, name).await
    }

    async fn delete_genre(&self, id: &GenreId) -> Result<bool> {
        genres::delete(&self.pool, id).await
    }

    // Books
    async fn get_books_by_genre(&self, genre_id: &GenreId) -> Result<Vec<BookSummary>> {
        books::get_by_genre(&self.pool, genre_id).await
    }

    async fn create_book(&self, book: CreateBook) -> Result<Book> {
        books::create(&self.pool, book).await
    }
}

use catalog_core::{error::Result, types::*, CatalogError};
use sqlx::{Row, SqlitePool};

/// Get the title/summary projection of every book in a genre
pub async fn get_by_genre(pool: &SqlitePool, genre_id: &GenreId) -> Result<Vec<BookSummary>> {
    let rows = sqlx::query(
        "SELECT id, title, summary
         FROM books
         WHERE genre_id = ?
         ORDER BY title",
    )
    .bind(genre_id.as_str())
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| -> Result<BookSummary> {
            Ok(BookSummary {
                id: BookId::new(row.try_get::<String, _>("id")?),
                title: row.try_get("title")?,
                summary: row.try_get("summary")?,
            })
        })
        .collect()
}

pub async fn create(pool: &SqlitePool, book: CreateBook) -> Result<Book> {
    let id = BookId::generate();
    let created_at = chrono::Utc::now().to_rfc3339();

    sqlx::query(
        "INSERT INTO books (id, title, summary, genre_id, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id.as_str())
    .bind(&book.title)
    .bind(&book.summary)
    .bind(book.genre_id.as_str())
    .bind(&created_at)
    .execute(pool)
    .await
    .map_err(|err| match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            CatalogError::not_found("Genre", book.genre_id.as_str())
        }
        _ => err.into(),
    })?;

    Ok(Book {
        id,
        title: book.title,
        summary: book.summary,
        genre_id: book.genre_id,
        created_at,
    })
}

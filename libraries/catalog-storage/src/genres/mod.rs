use catalog_core::{collation::collation_key, error::Result, types::*, CatalogError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn from_row(row: &SqliteRow) -> Result<Genre> {
    Ok(Genre {
        id: GenreId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Map a failed write on the `name_key` unique index to `Duplicate`
fn write_error(err: sqlx::Error, name: &str) -> CatalogError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            CatalogError::Duplicate(format!("genre name '{}'", name))
        }
        _ => err.into(),
    }
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Genre>> {
    let rows = sqlx::query(
        "SELECT id, name, created_at
         FROM genres
         ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: &GenreId) -> Result<Option<Genre>> {
    let row = sqlx::query(
        "SELECT id, name, created_at
         FROM genres
         WHERE id = ?",
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Find a genre whose name collates equal to `name`
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Genre>> {
    let row = sqlx::query(
        "SELECT id, name, created_at
         FROM genres
         WHERE name_key = ?",
    )
    .bind(collation_key(name))
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

pub async fn create(pool: &SqlitePool, genre: CreateGenre) -> Result<Genre> {
    let id = GenreId::generate();
    let created_at = chrono::Utc::now().to_rfc3339();

    sqlx::query(
        "INSERT INTO genres (id, name, name_key, created_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(id.as_str())
    .bind(&genre.name)
    .bind(collation_key(&genre.name))
    .bind(&created_at)
    .execute(pool)
    .await
    .map_err(|e| write_error(e, &genre.name))?;

    tracing::debug!(genre_id = %id, name = %genre.name, "Inserted genre");

    Ok(Genre {
        id,
        name: genre.name,
        created_at,
    })
}

/// Rename a genre, keeping its identifier
pub async fn update_name(pool: &SqlitePool, id: &GenreId, name: &str) -> Result<Genre> {
    let result = sqlx::query(
        "UPDATE genres
         SET name = ?, name_key = ?
         WHERE id = ?",
    )
    .bind(name)
    .bind(collation_key(name))
    .bind(id.as_str())
    .execute(pool)
    .await
    .map_err(|e| write_error(e, name))?;

    if result.rows_affected() == 0 {
        return Err(CatalogError::not_found("Genre", id.as_str()));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| CatalogError::storage("Failed to retrieve updated genre"))
}

/// Delete a genre; books referencing it block the delete
pub async fn delete(pool: &SqlitePool, id: &GenreId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM genres WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                CatalogError::referenced("Genre", id.as_str())
            }
            _ => err.into(),
        })?;

    Ok(result.rows_affected() > 0)
}

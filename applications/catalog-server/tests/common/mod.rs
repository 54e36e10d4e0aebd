//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use catalog_core::{
    collation::collation_key, Book, BookId, BookSummary, CatalogError, CatalogStore, CreateBook,
    CreateGenre, Genre, GenreId, Result,
};
use catalog_server::{create_router, AppState};
use catalog_storage::SqliteCatalog;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

/// In-memory catalog store mirroring the `SQLite` store's rules
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    genres: Vec<Genre>,
    books: Vec<Book>,
    next_id: u64,
}

impl Inner {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}{}", prefix, self.next_id)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genre_count(&self) -> usize {
        self.inner.lock().unwrap().genres.len()
    }

    pub fn genres(&self) -> Vec<Genre> {
        self.inner.lock().unwrap().genres.clone()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_genres(&self) -> Result<Vec<Genre>> {
        let mut genres = self.inner.lock().unwrap().genres.clone();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn get_genre(&self, id: &GenreId) -> Result<Option<Genre>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.genres.iter().find(|g| &g.id == id).cloned())
    }

    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>> {
        let key = collation_key(name);
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .genres
            .iter()
            .find(|g| collation_key(&g.name) == key)
            .cloned())
    }

    async fn create_genre(&self, genre: CreateGenre) -> Result<Genre> {
        let mut inner = self.inner.lock().unwrap();
        let key = collation_key(&genre.name);
        if inner.genres.iter().any(|g| collation_key(&g.name) == key) {
            return Err(CatalogError::Duplicate(genre.name));
        }
        let genre = Genre {
            id: GenreId::new(inner.next_id("genre-")),
            name: genre.name,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        };
        inner.genres.push(genre.clone());
        Ok(genre)
    }

    async fn update_genre_name(&self, id: &GenreId, name: &str) -> Result<Genre> {
        let mut inner = self.inner.lock().unwrap();
        let key = collation_key(name);
        if inner
            .genres
            .iter()
            .any(|g| &g.id != id && collation_key(&g.name) == key)
        {
            return Err(CatalogError::Duplicate(name.to_string()));
        }
        let genre = inner
            .genres
            .iter_mut()
            .find(|g| &g.id == id)
            .ok_or_else(|| CatalogError::not_found("Genre", id.as_str()))?;
        genre.name = name.to_string();
        Ok(genre.clone())
    }

    async fn delete_genre(&self, id: &GenreId) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        if inner.books.iter().any(|b| &b.genre_id == id) {
            return Err(CatalogError::referenced("Genre", id.as_str()));
        }
        let before = inner.genres.len();
        inner.genres.retain(|g| &g.id != id);
        Ok(inner.genres.len() < before)
    }

    async fn get_books_by_genre(&self, genre_id: &GenreId) -> Result<Vec<BookSummary>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .books
            .iter()
            .filter(|b| &b.genre_id == genre_id)
            .cloned()
            .map(BookSummary::from)
            .collect())
    }

    async fn create_book(&self, book: CreateBook) -> Result<Book> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.genres.iter().any(|g| g.id == book.genre_id) {
            return Err(CatalogError::not_found("Genre", book.genre_id.as_str()));
        }
        let book = Book {
            id: BookId::new(inner.next_id("book-")),
            title: book.title,
            summary: book.summary,
            genre_id: book.genre_id,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        };
        inner.books.push(book.clone());
        Ok(book)
    }
}

/// Create a migrated in-memory `SQLite` store
pub async fn create_test_store() -> Arc<SqliteCatalog> {
    let pool = catalog_storage::create_memory_pool()
        .await
        .expect("Failed to create in-memory database");
    Arc::new(SqliteCatalog::new(pool))
}

/// Build the full router over a store
pub fn create_test_app<S: CatalogStore + 'static>(store: Arc<S>) -> Router {
    create_router(AppState::new(store))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response) -> String {
    response
        .headers()
        .get("location")
        .expect("redirect without location")
        .to_str()
        .unwrap()
        .to_string()
}

/// Read the `value` attribute of the form's name input, decoded the way a
/// browser decodes it
pub fn name_input_value(html: &str) -> String {
    let start = html.find("name=\"name\"").expect("form without name input");
    let rest = &html[start..];
    let open = rest.find("value=\"").expect("name input without value") + "value=\"".len();
    let close = rest[open..].find('"').unwrap();
    decode_entities(&rest[open..open + close])
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#x2F;", "/")
        .replace("&#x5C;", "\\")
        .replace("&#96;", "`")
        .replace("&amp;", "&")
}

/// Encode a single `name` field as `application/x-www-form-urlencoded`
pub fn name_form_body(value: &str) -> String {
    let mut body = String::from("name=");
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'*' => {
                body.push(byte as char)
            }
            b' ' => body.push('+'),
            _ => body.push_str(&format!("%{:02X}", byte)),
        }
    }
    body
}

/// Test fixtures
pub mod fixtures {
    pub const VALID_NAME: &str = "Fiction";
    pub const SHORT_NAME: &str = "ab";
}

use catalog_core::{
    types::{CreateBook, GenreId},
    CatalogError, CatalogStore,
};
use catalog_storage::SqliteCatalog;

use test_helpers::{create_test_book, create_test_genre, TestDb};

#[tokio::test]
async fn test_books_by_genre_projects_title_and_summary() {
    let db = TestDb::new().await;

    let fantasy = create_test_genre(db.pool(), "Fantasy").await;
    let horror = create_test_genre(db.pool(), "Horror").await;

    let hobbit = create_test_book(db.pool(), "The Hobbit", &fantasy.id).await;
    create_test_book(db.pool(), "Earthsea", &fantasy.id).await;
    create_test_book(db.pool(), "Dracula", &horror.id).await;

    let books = catalog_storage::books::get_by_genre(db.pool(), &fantasy.id)
        .await
        .unwrap();
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Earthsea", "The Hobbit"]);

    let summary = books.iter().find(|b| b.id == hobbit.id).unwrap();
    assert_eq!(summary.summary, "Summary of The Hobbit");
    assert_eq!(summary.url(), format!("/catalog/book/{}", hobbit.id));
}

#[tokio::test]
async fn test_books_by_unknown_genre_is_empty() {
    let db = TestDb::new().await;

    let books = catalog_storage::books::get_by_genre(db.pool(), &GenreId::new("missing"))
        .await
        .unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_create_book_requires_existing_genre() {
    let db = TestDb::new().await;

    let result = catalog_storage::books::create(
        db.pool(),
        CreateBook {
            title: "Orphan".to_string(),
            summary: "No genre".to_string(),
            genre_id: GenreId::new("missing"),
        },
    )
    .await;
    assert!(matches!(result, Err(CatalogError::NotFound { .. })));
}

#[tokio::test]
async fn test_store_trait_against_memory_pool() {
    let pool = catalog_storage::create_memory_pool().await.unwrap();
    let store = SqliteCatalog::new(pool);

    let genre = store
        .create_genre(catalog_core::CreateGenre {
            name: "Satire".to_string(),
        })
        .await
        .unwrap();
    store
        .create_book(CreateBook {
            title: "Candide".to_string(),
            summary: "Optimism, tested.".to_string(),
            genre_id: genre.id.clone(),
        })
        .await
        .unwrap();

    // Concurrent reads share the single pinned connection
    let (found, books) = tokio::try_join!(
        store.get_genre(&genre.id),
        store.get_books_by_genre(&genre.id)
    )
    .unwrap();
    assert_eq!(found, Some(genre));
    assert_eq!(books.len(), 1);
}

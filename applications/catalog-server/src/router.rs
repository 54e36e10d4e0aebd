/// Route table
use crate::{api, state::AppState};
use axum::{routing::get, Router};
use catalog_core::CatalogStore;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the catalog router over any store implementation
pub fn create_router<S>(app_state: AppState<S>) -> Router
where
    S: CatalogStore + 'static,
{
    let catalog_routes = Router::new()
        .route("/genres", get(api::genres::genre_list::<S>))
        .route(
            "/genre/create",
            get(api::genres::genre_create_get).post(api::genres::genre_create_post::<S>),
        )
        .route("/genre/:id", get(api::genres::genre_detail::<S>))
        .route(
            "/genre/:id/delete",
            get(api::genres::genre_delete_get::<S>).post(api::genres::genre_delete_post::<S>),
        )
        .route(
            "/genre/:id/update",
            get(api::genres::genre_update_get::<S>).post(api::genres::genre_update_post::<S>),
        );

    Router::new()
        .route("/health", get(api::health::health))
        .nest("/catalog", catalog_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}

/// Shared application state
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Generic over the store so the same handlers run against `SQLite` in
/// production and against fakes in tests.
pub struct AppState<S> {
    pub store: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

// Manual impl: cloning the state only clones the `Arc`, so `S` need not be `Clone`
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

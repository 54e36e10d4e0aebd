//! Catalog Server Library
//!
//! Genre pages of the library catalog: list, detail, create, update and
//! delete, rendered as HTML over any `CatalogStore`.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod response;
pub mod router;
pub mod state;
pub mod views;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use response::Outcome;
pub use router::create_router;
pub use state::AppState;
pub use views::View;

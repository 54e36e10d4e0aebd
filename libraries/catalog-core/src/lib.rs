//! Catalog Core
//!
//! Platform-agnostic domain types, validation, and the storage trait for the
//! library catalog.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Genre`, `Book`, `BookSummary` and their identifiers
//! - **Validation**: form-field sanitizing and the name collation key
//! - **Storage**: the `CatalogStore` trait injected into request handlers
//! - **Error Handling**: unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use catalog_core::validation::{validate_name, NameValidation};
//!
//! match validate_name("  Fiction ", "Genre must contain at least 3 characters") {
//!     NameValidation::Valid(name) => assert_eq!(name, "Fiction"),
//!     NameValidation::Invalid { .. } => unreachable!(),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod collation;
pub mod error;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use storage::CatalogStore;

pub use types::{Book, BookId, BookSummary, CreateBook, CreateGenre, Genre, GenreId};

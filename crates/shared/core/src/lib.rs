//! Catalog Core Domain
//!
//! Pure domain types for the product catalog service.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod feed;
pub mod reconcile;
pub mod validation;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Category, CategoryDraft, Enrichment, Product, ProductDraft};
pub use error::{CatalogError, CatalogResult, ErrorKind, INTERNAL_ERROR_MESSAGE};
pub use feed::{ExternalProduct, FeedRating};
pub use reconcile::{MatchOutcome, Reconciliation, normalize_title, reconcile};
pub use validation::{FieldViolation, ValidationErrors};
pub use values::{CategoryId, Price, ProductId, Timestamp};

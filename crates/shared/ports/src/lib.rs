//! Catalog Ports
//!
//! Port definitions (traits) for the product catalog.
//! These define the boundaries between the catalog's business rules and
//! infrastructure: the relational store, the external product feed, and time.

mod clock;
mod error;
mod feed;
mod repository;

pub use clock::Clock;
pub use error::{StoreError, StoreResult};
pub use feed::ExternalCatalog;
pub use repository::{CategoryRepository, EnrichmentWrite, ProductRepository};

//! External Feed Gateway
//!
//! Read-only client for a remote product catalog exposing
//! `GET /products` and `GET /products/{id}` (the FakeStore API shape).
//!
//! Transport failures never escape through [`catalog_ports::ExternalCatalog`]:
//! they are logged and degrade to "no data".

mod client;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FakeStoreClient, FeedConfig, FeedError};

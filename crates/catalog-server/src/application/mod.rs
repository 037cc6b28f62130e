pub mod catalog;
pub mod reconciler;
pub mod service;

pub use catalog::CatalogManager;
pub use reconciler::{Reconciler, SyncReport};
pub use service::CatalogService;

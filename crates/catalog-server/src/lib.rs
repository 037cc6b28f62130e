//! Catalog Server
//!
//! Product and category catalog with two front-ends and an external feed
//! reconciler.
//!
//! # Architecture
//!
//! - **Application**: the protocol-neutral [`CatalogService`] and its
//!   implementation, plus the [`Reconciler`] that merges feed attributes into
//!   local products
//! - **Infrastructure**: in-memory relational-style store, configuration, demo
//!   seed data
//! - **Presentation**: REST API (axum) and RPC services (tonic/prost)
//!
//! # Example
//!
//! ```ignore
//! use catalog_server::{CatalogServer, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = CatalogServer::new(ServiceConfig::default())?;
//!     server.seed().await?;
//!     server.run().await
//! }
//! ```

pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use application::{CatalogManager, CatalogService, Reconciler, SyncReport};
pub use infrastructure::{ConfigError, InMemoryCatalogStore, ServiceConfig, seed_demo_data};
pub use presentation::{
    ApiError, AppState, CategoryRpc, CategoryRpcService, ProductRpc, ProductRpcService,
    create_router,
};

use axum::Router;
use catalog_clock::SystemClock;
use catalog_core::CatalogResult;
use catalog_feed::{FakeStoreClient, FeedError};
use catalog_ports::{Clock, ExternalCatalog};
use std::sync::Arc;
use tokio::net::TcpListener;

/// The catalog server: one store and one service shared by both front-ends
pub struct CatalogServer {
    pub config: ServiceConfig,
    pub store: Arc<InMemoryCatalogStore>,
    pub catalog: Arc<dyn CatalogService>,
}

impl CatalogServer {
    /// Create a server backed by the configured HTTP feed and the system clock
    pub fn new(config: ServiceConfig) -> Result<Self, FeedError> {
        let feed = Arc::new(FakeStoreClient::new(config.feed.to_feed_config())?);
        Ok(Self::with_parts(config, feed, Arc::new(SystemClock::new())))
    }

    /// Create a server with an explicit feed and clock
    pub fn with_parts<F, K>(config: ServiceConfig, feed: Arc<F>, clock: Arc<K>) -> Self
    where
        F: ExternalCatalog + 'static,
        K: Clock + 'static,
    {
        let store = Arc::new(InMemoryCatalogStore::new());
        let catalog: Arc<dyn CatalogService> =
            Arc::new(CatalogManager::new(Arc::clone(&store), feed, clock));

        CatalogServer {
            config,
            store,
            catalog,
        }
    }

    /// Load demo data when the configuration asks for it
    pub async fn seed(&self) -> CatalogResult<()> {
        if self.config.seed_demo_data {
            seed_demo_data(self.catalog.as_ref()).await?;
        }
        Ok(())
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        create_router(Arc::new(AppState::new(Arc::clone(&self.catalog))))
    }

    pub fn product_rpc(&self) -> ProductRpcService {
        ProductRpcService::new(Arc::clone(&self.catalog))
    }

    pub fn category_rpc(&self) -> CategoryRpcService {
        CategoryRpcService::new(Arc::clone(&self.catalog))
    }

    /// Run the REST server until the process is stopped
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.bind_address();
        let router = self.rest_router();

        tracing::info!("Catalog server listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

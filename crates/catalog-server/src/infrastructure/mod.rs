pub mod config;
pub mod seed;
pub mod store;

pub use config::{ConfigError, FeedSettings, ServerConfig, ServiceConfig};
pub use seed::seed_demo_data;
pub use store::InMemoryCatalogStore;

pub mod rest;
pub mod rpc;

pub use rest::{ApiError, AppState, create_router};
pub use rpc::{CategoryRpc, CategoryRpcService, ProductRpc, ProductRpcService};

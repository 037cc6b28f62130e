//! RPC front-end
//!
//! Service traits in the shape tonic generates for a server, with the
//! message types hand-derived with prost. Transport wiring is left to the
//! embedding binary.

mod categories;
pub mod messages;
mod products;
mod status;

pub use categories::{CategoryRpc, CategoryRpcService};
pub use products::{ProductRpc, ProductRpcService};
pub use status::{error_details, to_status};

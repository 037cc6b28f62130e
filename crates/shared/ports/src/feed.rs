use async_trait::async_trait;
use catalog_core::ExternalProduct;

/// Read-only third-party product catalog
///
/// Implementations absorb every transport or decoding failure: a failed
/// listing is an empty list and a failed lookup is `None`.
#[async_trait]
pub trait ExternalCatalog: Send + Sync {
    /// Snapshot of the whole feed, in the feed's own order
    async fn list_products(&self) -> Vec<ExternalProduct>;

    /// A single record by remote identifier
    async fn get_product(&self, remote_id: i64) -> Option<ExternalProduct>;
}

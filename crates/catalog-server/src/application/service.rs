use async_trait::async_trait;
use catalog_core::{
    CatalogResult, Category, CategoryDraft, CategoryId, Price, Product, ProductDraft, ProductId,
};
/// Protocol-neutral catalog operations
///
/// Both the REST and RPC front-ends hold an `Arc<dyn CatalogService>` and do
/// nothing but translate shapes, so the business semantics are defined once.
#[async_trait]
pub trait CatalogService: Send + Sync {
    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// Every persisted product, zero stock included. With `refresh` the
    /// external feed is reconciled first; a feed failure never fails the
    /// listing.
    async fn list_products(&self, refresh: bool) -> CatalogResult<Vec<Product>>;

    async fn get_product(&self, id: ProductId) -> CatalogResult<Product>;

    async fn create_product(&self, draft: ProductDraft) -> CatalogResult<Product>;

    async fn update_product(&self, id: ProductId, draft: ProductDraft) -> CatalogResult<Product>;

    async fn delete_product(&self, id: ProductId) -> CatalogResult<()>;

    /// Case-insensitive substring match on product names
    async fn search_by_name(&self, needle: &str) -> CatalogResult<Vec<Product>>;

    /// Products priced at or below `ceiling`
    async fn cheaper_than(&self, ceiling: Price) -> CatalogResult<Vec<Product>>;

    async fn in_stock(&self) -> CatalogResult<Vec<Product>>;

    /// Products of one category; empty when the category does not exist
    async fn by_category(&self, id: CategoryId) -> CatalogResult<Vec<Product>>;

    /// Start a reconciliation run in the background and return at once
    ///
    /// Must be called from within a Tokio runtime. The run is detached; its
    /// outcome only shows up in the logs and in the enriched products.
    fn sync_with_external_feed(&self);

    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    async fn create_category(&self, draft: CategoryDraft) -> CatalogResult<Category>;

    async fn get_category(&self, id: CategoryId) -> CatalogResult<Category>;

    async fn list_categories(&self) -> CatalogResult<Vec<Category>>;

    async fn update_category(
        &self,
        id: CategoryId,
        draft: CategoryDraft,
    ) -> CatalogResult<Category>;

    /// Delete a category together with its products
    async fn delete_category(&self, id: CategoryId) -> CatalogResult<()>;

    /// Exact, case-sensitive name lookup
    async fn find_category_by_name(&self, name: &str) -> CatalogResult<Category>;
}

use async_trait::async_trait;
use catalog_core::{
    Category, CategoryDraft, CategoryId, Enrichment, Price, Product, ProductDraft, ProductId,
    Timestamp,
};

use crate::error::StoreResult;

/// Outcome of a batch enrichment write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentWrite {
    /// Products whose enrichment was replaced
    pub written: usize,
    /// Products that disappeared between snapshot and write
    pub vanished: Vec<ProductId>,
}

/// Repository for persisted products
///
/// Every method is atomic with respect to the entities it touches. Inserts
/// and updates that reference a category check that category under the same
/// atomic boundary as the write.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product, assigning its id; fails with `NotFound` when
    /// `draft.category_id` does not resolve
    async fn insert_product(&self, draft: ProductDraft, now: Timestamp) -> StoreResult<Product>;

    /// Get a product by id
    async fn get_product(&self, id: ProductId) -> StoreResult<Product>;

    /// Replace the caller-owned fields of an existing product
    async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
        now: Timestamp,
    ) -> StoreResult<Product>;

    /// Delete a product
    async fn delete_product(&self, id: ProductId) -> StoreResult<()>;

    /// All products, ascending by id
    async fn list_products(&self) -> StoreResult<Vec<Product>>;

    /// Products whose name contains `needle`, ignoring case
    async fn find_by_name_contains(&self, needle: &str) -> StoreResult<Vec<Product>>;

    /// Products priced at or below `ceiling`
    async fn find_by_price_at_most(&self, ceiling: Price) -> StoreResult<Vec<Product>>;

    /// Products with positive stock
    async fn find_in_stock(&self) -> StoreResult<Vec<Product>>;

    /// Products attached to a category
    async fn find_by_category(&self, category_id: CategoryId) -> StoreResult<Vec<Product>>;

    /// Replace enrichment attributes of many products in one best-effort
    /// batch. Each entry is an idempotent per-product upsert; a missing
    /// product is reported, not fatal.
    async fn write_enrichments(
        &self,
        updates: Vec<(ProductId, Enrichment)>,
    ) -> StoreResult<EnrichmentWrite>;
}

/// Repository for persisted categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category; fails with `Conflict` if the name is taken
    async fn insert_category(&self, draft: CategoryDraft) -> StoreResult<Category>;

    /// Get a category by id, with its current products
    async fn get_category(&self, id: CategoryId) -> StoreResult<Category>;

    /// Get a category by exact name
    async fn get_category_by_name(&self, name: &str) -> StoreResult<Category>;

    /// All categories, ascending by id
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Replace name and description; fails with `Conflict` if another
    /// category already holds the new name
    async fn update_category(&self, id: CategoryId, draft: CategoryDraft) -> StoreResult<Category>;

    /// Delete a category and every product it owns
    async fn delete_category(&self, id: CategoryId) -> StoreResult<()>;
}

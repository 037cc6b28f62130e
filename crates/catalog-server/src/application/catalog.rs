use async_trait::async_trait;
use catalog_core::{
    CatalogResult, Category, CategoryDraft, CategoryId, Price, Product, ProductDraft, ProductId,
};
use catalog_ports::{CategoryRepository, Clock, ExternalCatalog, ProductRepository};
use std::sync::Arc;
use tracing::info;

use super::{CatalogService, Reconciler, SyncReport};

/// Catalog service over a store, a clock and the external feed
pub struct CatalogManager<S, F, K>
where
    S: ProductRepository + CategoryRepository + 'static,
    F: ExternalCatalog + 'static,
    K: Clock,
{
    store: Arc<S>,
    clock: Arc<K>,
    reconciler: Reconciler<S, F>,
}

impl<S, F, K> CatalogManager<S, F, K>
where
    S: ProductRepository + CategoryRepository + 'static,
    F: ExternalCatalog + 'static,
    K: Clock,
{
    pub fn new(store: Arc<S>, feed: Arc<F>, clock: Arc<K>) -> Self {
        let reconciler = Reconciler::new(Arc::clone(&store), feed);
        Self {
            store,
            clock,
            reconciler,
        }
    }

    /// Run reconciliation inline, waiting for it to finish
    pub async fn reconcile_now(&self) -> SyncReport {
        self.reconciler.run().await
    }
}

#[async_trait]
impl<S, F, K> CatalogService for CatalogManager<S, F, K>
where
    S: ProductRepository + CategoryRepository + 'static,
    F: ExternalCatalog + 'static,
    K: Clock,
{
    async fn list_products(&self, refresh: bool) -> CatalogResult<Vec<Product>> {
        if refresh {
            self.reconcile_now().await;
        }
        Ok(self.store.list_products().await?)
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        Ok(self.store.get_product(id).await?)
    }

    async fn create_product(&self, draft: ProductDraft) -> CatalogResult<Product> {
        draft.validate()?;
        let product = self.store.insert_product(draft, self.clock.now()).await?;
        info!(product_id = %product.id, name = %product.name, "Created product");
        Ok(product)
    }

    async fn update_product(&self, id: ProductId, draft: ProductDraft) -> CatalogResult<Product> {
        draft.validate()?;
        let product = self.store.update_product(id, draft, self.clock.now()).await?;
        info!(product_id = %id, "Updated product");
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        self.store.delete_product(id).await?;
        info!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn search_by_name(&self, needle: &str) -> CatalogResult<Vec<Product>> {
        Ok(self.store.find_by_name_contains(needle).await?)
    }

    async fn cheaper_than(&self, ceiling: Price) -> CatalogResult<Vec<Product>> {
        Ok(self.store.find_by_price_at_most(ceiling).await?)
    }

    async fn in_stock(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.store.find_in_stock().await?)
    }

    async fn by_category(&self, id: CategoryId) -> CatalogResult<Vec<Product>> {
        Ok(self.store.find_by_category(id).await?)
    }

    fn sync_with_external_feed(&self) {
        let reconciler = self.reconciler.clone();
        info!("External feed sync requested");
        tokio::spawn(async move {
            reconciler.run().await;
        });
    }

    async fn create_category(&self, draft: CategoryDraft) -> CatalogResult<Category> {
        draft.validate()?;
        let category = self.store.insert_category(draft).await?;
        info!(category_id = %category.id, name = %category.name, "Created category");
        Ok(category)
    }

    async fn get_category(&self, id: CategoryId) -> CatalogResult<Category> {
        Ok(self.store.get_category(id).await?)
    }

    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.store.list_categories().await?)
    }

    async fn update_category(
        &self,
        id: CategoryId,
        draft: CategoryDraft,
    ) -> CatalogResult<Category> {
        draft.validate()?;
        let category = self.store.update_category(id, draft).await?;
        info!(category_id = %id, "Updated category");
        Ok(category)
    }

    async fn delete_category(&self, id: CategoryId) -> CatalogResult<()> {
        self.store.delete_category(id).await?;
        info!(category_id = %id, "Deleted category and its products");
        Ok(())
    }

    async fn find_category_by_name(&self, name: &str) -> CatalogResult<Category> {
        Ok(self.store.get_category_by_name(name).await?)
    }
}

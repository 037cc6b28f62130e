use async_trait::async_trait;
use catalog_core::{
    Category, CategoryDraft, CategoryId, Enrichment, Price, Product, ProductDraft, ProductId,
    Timestamp,
};
use catalog_ports::{
    CategoryRepository, EnrichmentWrite, ProductRepository, StoreError, StoreResult,
};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Both catalog tables behind one lock, so reads spanning a category and its
/// products see one snapshot and category checks are atomic with the write
#[derive(Default)]
struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    products: BTreeMap<ProductId, Product>,
    next_category_id: i64,
    next_product_id: i64,
}

impl Tables {
    fn next_product_id(&mut self) -> ProductId {
        self.next_product_id += 1;
        ProductId(self.next_product_id)
    }

    fn next_category_id(&mut self) -> CategoryId {
        self.next_category_id += 1;
        CategoryId(self.next_category_id)
    }

    fn ensure_category(&self, id: Option<CategoryId>) -> StoreResult<()> {
        match id {
            Some(id) if !self.categories.contains_key(&id) => {
                Err(StoreError::not_found("Category", "id", id))
            }
            _ => Ok(()),
        }
    }

    fn name_taken(&self, name: &str, except: Option<CategoryId>) -> bool {
        self.categories
            .values()
            .any(|c| c.name == name && Some(c.id) != except)
    }

    /// Category with `product_ids` filled from the product table
    fn hydrate(&self, category: &Category) -> Category {
        let mut category = category.clone();
        category.product_ids = self
            .products
            .values()
            .filter(|p| p.category_id == Some(category.id))
            .map(|p| p.id)
            .collect();
        category
    }

    fn products_where(&self, pred: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.products.values().filter(|p| pred(p)).cloned().collect()
    }
}

/// In-memory relational-style catalog store
///
/// Thread-safe storage for categories and products using a single
/// `parking_lot::RwLock`. Ids are sequential surrogate keys starting at 1.
/// Suitable for local runs and testing.
pub struct InMemoryCatalogStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
        }
    }

    pub fn product_count(&self) -> usize {
        self.tables.read().products.len()
    }

    pub fn category_count(&self) -> usize {
        self.tables.read().categories.len()
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryCatalogStore {
    fn clone(&self) -> Self {
        Self {
            tables: Arc::clone(&self.tables),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalogStore {
    async fn insert_product(&self, draft: ProductDraft, now: Timestamp) -> StoreResult<Product> {
        let mut tables = self.tables.write();
        tables.ensure_category(draft.category_id)?;

        let id = tables.next_product_id();
        let product = Product::create(id, draft, now);
        tables.products.insert(id, product.clone());
        Ok(product)
    }

    async fn get_product(&self, id: ProductId) -> StoreResult<Product> {
        self.tables
            .read()
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Product", "id", id))
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
        now: Timestamp,
    ) -> StoreResult<Product> {
        let mut tables = self.tables.write();
        if !tables.products.contains_key(&id) {
            return Err(StoreError::not_found("Product", "id", id));
        }
        tables.ensure_category(draft.category_id)?;

        let product = tables
            .products
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Product", "id", id))?;
        product.revise(draft, now);
        Ok(product.clone())
    }

    async fn delete_product(&self, id: ProductId) -> StoreResult<()> {
        self.tables
            .write()
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("Product", "id", id))
    }

    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.tables.read().products_where(|_| true))
    }

    async fn find_by_name_contains(&self, needle: &str) -> StoreResult<Vec<Product>> {
        Ok(self.tables.read().products_where(|p| p.name_contains(needle)))
    }

    async fn find_by_price_at_most(&self, ceiling: Price) -> StoreResult<Vec<Product>> {
        Ok(self.tables.read().products_where(|p| p.price <= ceiling))
    }

    async fn find_in_stock(&self) -> StoreResult<Vec<Product>> {
        Ok(self.tables.read().products_where(Product::in_stock))
    }

    async fn find_by_category(&self, category_id: CategoryId) -> StoreResult<Vec<Product>> {
        Ok(self
            .tables
            .read()
            .products_where(|p| p.category_id == Some(category_id)))
    }

    async fn write_enrichments(
        &self,
        updates: Vec<(ProductId, Enrichment)>,
    ) -> StoreResult<EnrichmentWrite> {
        let mut tables = self.tables.write();
        let mut outcome = EnrichmentWrite::default();

        for (id, enrichment) in updates {
            match tables.products.get_mut(&id) {
                Some(product) => {
                    product.enrich(enrichment);
                    outcome.written += 1;
                }
                None => outcome.vanished.push(id),
            }
        }

        Ok(outcome)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalogStore {
    async fn insert_category(&self, draft: CategoryDraft) -> StoreResult<Category> {
        let mut tables = self.tables.write();
        if tables.name_taken(&draft.name, None) {
            return Err(StoreError::Conflict(format!(
                "Category with name {} already exists",
                draft.name
            )));
        }

        let id = tables.next_category_id();
        let category = Category::create(id, draft);
        tables.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn get_category(&self, id: CategoryId) -> StoreResult<Category> {
        let tables = self.tables.read();
        tables
            .categories
            .get(&id)
            .map(|c| tables.hydrate(c))
            .ok_or_else(|| StoreError::not_found("Category", "id", id))
    }

    async fn get_category_by_name(&self, name: &str) -> StoreResult<Category> {
        let tables = self.tables.read();
        tables
            .categories
            .values()
            .find(|c| c.name == name)
            .map(|c| tables.hydrate(c))
            .ok_or_else(|| StoreError::not_found("Category", "name", name))
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read();
        Ok(tables.categories.values().map(|c| tables.hydrate(c)).collect())
    }

    async fn update_category(&self, id: CategoryId, draft: CategoryDraft) -> StoreResult<Category> {
        let mut tables = self.tables.write();
        if !tables.categories.contains_key(&id) {
            return Err(StoreError::not_found("Category", "id", id));
        }
        if tables.name_taken(&draft.name, Some(id)) {
            return Err(StoreError::Conflict(format!(
                "Category with name {} already exists",
                draft.name
            )));
        }

        let category = tables
            .categories
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Category", "id", id))?;
        category.revise(draft);
        let category = category.clone();
        Ok(tables.hydrate(&category))
    }

    async fn delete_category(&self, id: CategoryId) -> StoreResult<()> {
        let mut tables = self.tables.write();
        if tables.categories.remove(&id).is_none() {
            return Err(StoreError::not_found("Category", "id", id));
        }
        // Owned products go with their category
        tables.products.retain(|_, p| p.category_id != Some(id));
        Ok(())
    }
}

use catalog_core::{CatalogResult, CategoryDraft, CategoryId, ProductDraft};
use rust_decimal::Decimal;

use crate::application::CatalogService;

/// (name, description, price in cents, stock)
const ELECTRONICS: &[(&str, &str, i64, i32)] = &[
    ("Laptop", "High-performance laptop", 99_999, 10),
    ("Smartphone", "Latest smartphone model", 69_999, 15),
];

const CLOTHING: &[(&str, &str, i64, i32)] = &[
    ("T-Shirt", "Cotton t-shirt", 1_999, 50),
    ("Jeans", "Denim jeans", 4_999, 30),
];

/// Populate an empty catalog with two categories and four products
///
/// Goes through the service so the demo data obeys the same validation as
/// caller input.
pub async fn seed_demo_data(catalog: &dyn CatalogService) -> CatalogResult<()> {
    let electronics = catalog
        .create_category(CategoryDraft::new(
            "Electronics",
            Some("Electronic devices and gadgets".into()),
        ))
        .await?;
    let clothing = catalog
        .create_category(CategoryDraft::new(
            "Clothing",
            Some("Apparel and accessories".into()),
        ))
        .await?;

    seed_products(catalog, electronics.id, ELECTRONICS).await?;
    seed_products(catalog, clothing.id, CLOTHING).await?;

    tracing::info!("Seeded demo catalog");
    Ok(())
}

async fn seed_products(
    catalog: &dyn CatalogService,
    category_id: CategoryId,
    rows: &[(&str, &str, i64, i32)],
) -> CatalogResult<()> {
    for &(name, description, cents, stock) in rows {
        catalog
            .create_product(ProductDraft {
                name: name.to_string(),
                description: Some(description.to_string()),
                price: Decimal::new(cents, 2),
                stock_quantity: stock,
                category_id: Some(category_id),
            })
            .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CatalogManager;
    use crate::infrastructure::InMemoryCatalogStore;
    use async_trait::async_trait;
    use catalog_clock::SystemClock;
    use catalog_core::ExternalProduct;
    use catalog_ports::ExternalCatalog;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    struct NoFeed;

    #[async_trait]
    impl ExternalCatalog for NoFeed {
        async fn list_products(&self) -> Vec<ExternalProduct> {
            Vec::new()
        }

        async fn get_product(&self, _remote_id: i64) -> Option<ExternalProduct> {
            None
        }
    }

    #[tokio::test]
    async fn test_seed_creates_demo_catalog() {
        let catalog = CatalogManager::new(
            Arc::new(InMemoryCatalogStore::new()),
            Arc::new(NoFeed),
            Arc::new(SystemClock::new()),
        );

        seed_demo_data(&catalog).await.unwrap();

        let electronics = catalog.find_category_by_name("Electronics").await.unwrap();
        assert_eq!(electronics.product_ids.len(), 2);

        let products = catalog.list_products(false).await.unwrap();
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop", "Smartphone", "T-Shirt", "Jeans"]);
        assert_eq!(products[0].price, dec!(999.99));
        assert_eq!(products[3].price, dec!(49.99));
    }

    #[tokio::test]
    async fn test_seeding_twice_conflicts() {
        let catalog = CatalogManager::new(
            Arc::new(InMemoryCatalogStore::new()),
            Arc::new(NoFeed),
            Arc::new(SystemClock::new()),
        );

        seed_demo_data(&catalog).await.unwrap();
        assert!(seed_demo_data(&catalog).await.is_err());
    }
}

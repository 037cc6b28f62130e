//! Integration tests for the RPC services
//!
//! Calls the service structs directly with `tonic::Request` and checks
//! replies, status codes and the encoded error details.

use async_trait::async_trait;
use catalog_clock::FixedClock;
use catalog_core::{ExternalProduct, FeedRating, INTERNAL_ERROR_MESSAGE};
use catalog_ports::ExternalCatalog;
use catalog_server::presentation::rpc::{error_details, messages::*};
use catalog_server::{CatalogServer, CategoryRpc, ProductRpc, ServiceConfig};
use std::sync::Arc;
use tonic::{Code, Request};

// ============================================================================
// Test Fixtures
// ============================================================================

struct StaticFeed(Vec<ExternalProduct>);

#[async_trait]
impl ExternalCatalog for StaticFeed {
    async fn list_products(&self) -> Vec<ExternalProduct> {
        self.0.clone()
    }

    async fn get_product(&self, remote_id: i64) -> Option<ExternalProduct> {
        self.0.iter().find(|p| p.id == remote_id).cloned()
    }
}

fn laptop_record() -> ExternalProduct {
    ExternalProduct {
        id: 9,
        title: "Laptop".into(),
        price: None,
        description: None,
        category: Some("electronics".into()),
        image: Some("http://x/y.jpg".into()),
        rating: Some(FeedRating {
            rate: 4.5,
            count: 100,
        }),
    }
}

async fn create_test_server(feed: Vec<ExternalProduct>) -> CatalogServer {
    let server = CatalogServer::with_parts(
        ServiceConfig::default(),
        Arc::new(StaticFeed(feed)),
        Arc::new(FixedClock::now_frozen()),
    );
    server.seed().await.unwrap();
    server
}

fn create_request(name: &str, price: f64, stock: i32, category: Option<i64>) -> CreateProductRequest {
    CreateProductRequest {
        product_name: name.into(),
        description: None,
        product_price: price,
        stock_quantity: stock,
        category_id: category,
    }
}

fn assert_price(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "price {} != {}",
        actual,
        expected
    );
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_get_product() {
    let server = create_test_server(vec![]).await;

    let reply = server
        .product_rpc()
        .get_product(Request::new(ProductRequest { id: 1 }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(reply.product_name, "Laptop");
    assert_price(reply.product_price, 999.99);
    assert!(reply.is_in_stock);
    assert_eq!(reply.category_id, Some(1));
    assert_eq!(reply.created_at.len(), "2024-01-01 00:00:00".len());
    assert!(reply.external_id.is_none());
}

#[tokio::test]
async fn test_get_unknown_product_is_not_found() {
    let server = create_test_server(vec![]).await;

    let status = server
        .product_rpc()
        .get_product(Request::new(ProductRequest { id: 99 }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "Product not found with id: 99");
    let details = error_details(&status).unwrap();
    assert_eq!(details.reason, "Product not found with id: 99");
    assert!(details.field_violations.is_empty());
}

#[tokio::test]
async fn test_list_products_without_refresh_leaves_enrichment_empty() {
    let server = create_test_server(vec![laptop_record()]).await;

    let reply = server
        .product_rpc()
        .list_products(Request::new(ListProductsRequest { refresh: false }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(reply.products.len(), 4);
    assert!(reply.products.iter().all(|p| p.rating.is_none()));
}

#[tokio::test]
async fn test_list_products_with_refresh_enriches() {
    let server = create_test_server(vec![laptop_record()]).await;

    let reply = server
        .product_rpc()
        .list_products(Request::new(ListProductsRequest { refresh: true }))
        .await
        .unwrap()
        .into_inner();

    let laptop = &reply.products[0];
    assert_eq!(laptop.external_id.as_deref(), Some("9"));
    assert_eq!(laptop.rating, Some(4.5));
    assert_eq!(laptop.rating_count, Some(100));
    assert_eq!(laptop.image_url.as_deref(), Some("http://x/y.jpg"));
    assert!(reply.products[1].external_id.is_none());
}

#[tokio::test]
async fn test_create_product() {
    let server = create_test_server(vec![]).await;

    let reply = server
        .product_rpc()
        .create_product(Request::new(create_request("Mug", 7.25, 0, Some(2))))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(reply.id, 5);
    assert_eq!(reply.product_price, 7.25);
    assert!(!reply.is_in_stock);
    assert_eq!(reply.created_at, reply.updated_at);
}

#[tokio::test]
async fn test_create_invalid_product_is_invalid_argument() {
    let server = create_test_server(vec![]).await;

    let status = server
        .product_rpc()
        .create_product(Request::new(create_request("", -3.0, -1, None)))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    let fields: Vec<_> = error_details(&status)
        .unwrap()
        .field_violations
        .into_iter()
        .map(|v| v.field)
        .collect();
    assert_eq!(fields, vec!["name", "price", "stockQuantity"]);
}

#[tokio::test]
async fn test_create_with_nan_price_is_invalid_argument() {
    let server = create_test_server(vec![]).await;

    let status = server
        .product_rpc()
        .create_product(Request::new(create_request("Mug", f64::NAN, 1, None)))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(
        error_details(&status).unwrap().field_violations[0].field,
        "price"
    );
}

#[tokio::test]
async fn test_negative_and_oversized_prices_share_field_name() {
    let server = create_test_server(vec![]).await;
    let rpc = server.product_rpc();

    let negative = rpc
        .create_product(Request::new(create_request("Mug", -1.0, 1, None)))
        .await
        .unwrap_err();
    let oversized = rpc
        .create_product(Request::new(create_request("Mug", 1e30, 1, None)))
        .await
        .unwrap_err();

    let negative = error_details(&negative).unwrap().field_violations;
    let oversized = error_details(&oversized).unwrap().field_violations;
    assert_eq!(negative[0].field, "price");
    assert_eq!(oversized[0].field, "price");
    assert_eq!(
        oversized[0].description,
        "must be within the supported decimal range"
    );
}

#[tokio::test]
async fn test_create_in_unknown_category_is_not_found() {
    let server = create_test_server(vec![]).await;

    let status = server
        .product_rpc()
        .create_product(Request::new(create_request("Mug", 5.0, 1, Some(42))))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_update_and_delete_product() {
    let server = create_test_server(vec![]).await;
    let rpc = server.product_rpc();

    let reply = rpc
        .update_product(Request::new(UpdateProductRequest {
            id: 3,
            product_name: "Polo Shirt".into(),
            description: Some("Pique cotton".into()),
            product_price: 29.99,
            stock_quantity: 12,
            category_id: Some(2),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(reply.product_name, "Polo Shirt");
    assert_price(reply.product_price, 29.99);

    let deleted = rpc
        .delete_product(Request::new(DeleteProductRequest { id: 3 }))
        .await
        .unwrap()
        .into_inner();
    assert!(deleted.success);

    let status = rpc
        .get_product(Request::new(ProductRequest { id: 3 }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_fetch_and_list_categories() {
    let server = create_test_server(vec![]).await;
    let rpc = server.category_rpc();

    let electronics = rpc
        .fetch_category(Request::new(FetchCategoryRequest { category_id: 1 }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(electronics.name, "Electronics");
    assert_eq!(electronics.product_ids, vec![1, 2]);

    let all = rpc
        .list_categories(Request::new(Empty {}))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(all.categories.len(), 2);
}

#[tokio::test]
async fn test_add_duplicate_category_is_already_exists() {
    let server = create_test_server(vec![]).await;

    let status = server
        .category_rpc()
        .add_category(Request::new(AddCategoryRequest {
            name: "Electronics".into(),
            description: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::AlreadyExists);
    assert!(error_details(&status).is_some());
}

#[tokio::test]
async fn test_modify_category() {
    let server = create_test_server(vec![]).await;

    let reply = server
        .category_rpc()
        .modify_category(Request::new(ModifyCategoryRequest {
            category_id: 2,
            name: "Apparel".into(),
            description: Some("Clothes".into()),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(reply.name, "Apparel");
    assert_eq!(reply.product_ids, vec![3, 4]);
}

#[tokio::test]
async fn test_modify_with_blank_name_is_invalid_argument() {
    let server = create_test_server(vec![]).await;

    let status = server
        .category_rpc()
        .modify_category(Request::new(ModifyCategoryRequest {
            category_id: 2,
            name: " ".into(),
            description: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_ne!(status.message(), INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_remove_category() {
    let server = create_test_server(vec![]).await;
    let rpc = server.category_rpc();

    let removed = rpc
        .remove_category(Request::new(RemoveCategoryRequest { category_id: 2 }))
        .await
        .unwrap()
        .into_inner();
    assert!(removed.success);

    let status = rpc
        .remove_category(Request::new(RemoveCategoryRequest { category_id: 2 }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    let products = server
        .product_rpc()
        .list_products(Request::new(ListProductsRequest { refresh: false }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(products.products.len(), 2);
}

#[tokio::test]
async fn test_find_category_by_name() {
    let server = create_test_server(vec![]).await;
    let rpc = server.category_rpc();

    let found = rpc
        .find_category_by_name(Request::new(FindByNameRequest {
            name: "Clothing".into(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(found.category_id, 2);

    let status = rpc
        .find_category_by_name(Request::new(FindByNameRequest {
            name: "CLOTHING".into(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use catalog_core::{CategoryDraft, CategoryId, ProductId};
use std::sync::Arc;

use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// Products
// ============================================================================

/// GET /api/products
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RefreshQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let Query(query) = query?;
    let list = state.catalog.list_products(query.refresh).await?;
    Ok(Json(products(list)))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<ProductResponse>> {
    let Path(id) = id?;
    let product = state.catalog.get_product(ProductId(id)).await?;
    Ok(Json(product.into()))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let Json(req) = body?;
    let product = state.catalog.create_product(req.into_draft()?).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<Json<ProductResponse>> {
    let Path(id) = id?;
    let Json(req) = body?;
    let product = state
        .catalog
        .update_product(ProductId(id), req.into_draft()?)
        .await?;
    Ok(Json(product.into()))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.catalog.delete_product(ProductId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/products/search?name=
pub async fn search_products(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let Query(query) = query?;
    let list = state.catalog.search_by_name(&query.name).await?;
    Ok(Json(products(list)))
}

/// GET /api/products/cheaper-than?price=
pub async fn cheaper_than(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let Query(query) = query?;
    let list = state.catalog.cheaper_than(query.price).await?;
    Ok(Json(products(list)))
}

/// GET /api/products/in-stock
pub async fn in_stock(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let list = state.catalog.in_stock().await?;
    Ok(Json(products(list)))
}

/// GET /api/products/by-category/{id}
pub async fn products_by_category(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let Path(id) = id?;
    let list = state.catalog.by_category(CategoryId(id)).await?;
    Ok(Json(products(list)))
}

/// POST /api/products/sync-with-external-feed
///
/// Answers before the run completes.
pub async fn sync_with_external_feed(State(state): State<Arc<AppState>>) -> StatusCode {
    state.catalog.sync_with_external_feed();
    StatusCode::NO_CONTENT
}

// ============================================================================
// Categories
// ============================================================================

/// GET /api/categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let list = state.catalog.list_categories().await?;
    Ok(Json(categories(list)))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<CategoryResponse>> {
    let Path(id) = id?;
    let category = state.catalog.get_category(CategoryId(id)).await?;
    Ok(Json(category.into()))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CategoryRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CategoryResponse>)> {
    let Json(req) = body?;
    let category = state.catalog.create_category(CategoryDraft::from(req)).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

/// PUT or PATCH /api/categories/{id}
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<CategoryRequest>, JsonRejection>,
) -> ApiResult<Json<CategoryResponse>> {
    let Path(id) = id?;
    let Json(req) = body?;
    let category = state
        .catalog
        .update_category(CategoryId(id), CategoryDraft::from(req))
        .await?;
    Ok(Json(category.into()))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.catalog.delete_category(CategoryId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/categories/by-name/{name}
pub async fn category_by_name(
    State(state): State<Arc<AppState>>,
    name: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<CategoryResponse>> {
    let Path(name) = name?;
    let category = state.catalog.find_category_by_name(&name).await?;
    Ok(Json(category.into()))
}

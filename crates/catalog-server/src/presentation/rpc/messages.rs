//! Protobuf messages of the product and category RPC services.
//!
//! Field numbers are part of the wire contract and are never reused.

// ============================================================================
// Products
// ============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProductRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListProductsRequest {
    /// Reconcile with the external feed before listing
    #[prost(bool, tag = "1")]
    pub refresh: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListProductsResponse {
    #[prost(message, repeated, tag = "1")]
    pub products: Vec<ProductReply>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductRequest {
    #[prost(string, tag = "1")]
    pub product_name: String,
    #[prost(string, optional, tag = "2")]
    pub description: Option<String>,
    #[prost(double, tag = "3")]
    pub product_price: f64,
    #[prost(int32, tag = "4")]
    pub stock_quantity: i32,
    #[prost(int64, optional, tag = "5")]
    pub category_id: Option<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateProductRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub product_name: String,
    #[prost(string, optional, tag = "3")]
    pub description: Option<String>,
    #[prost(double, tag = "4")]
    pub product_price: f64,
    #[prost(int32, tag = "5")]
    pub stock_quantity: i32,
    #[prost(int64, optional, tag = "6")]
    pub category_id: Option<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteProductRequest {
    #[prost(int64, tag = "1")]
    pub id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteProductResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProductReply {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub product_name: String,
    #[prost(string, optional, tag = "3")]
    pub description: Option<String>,
    #[prost(double, tag = "4")]
    pub product_price: f64,
    #[prost(int32, tag = "5")]
    pub stock_quantity: i32,
    #[prost(bool, tag = "6")]
    pub is_in_stock: bool,
    #[prost(int64, optional, tag = "7")]
    pub category_id: Option<i64>,
    /// `yyyy-MM-dd HH:mm:ss`, UTC
    #[prost(string, tag = "8")]
    pub created_at: String,
    #[prost(string, tag = "9")]
    pub updated_at: String,
    #[prost(string, optional, tag = "10")]
    pub external_id: Option<String>,
    #[prost(double, optional, tag = "11")]
    pub rating: Option<f64>,
    #[prost(uint32, optional, tag = "12")]
    pub rating_count: Option<u32>,
    #[prost(string, optional, tag = "13")]
    pub image_url: Option<String>,
}

// ============================================================================
// Categories
// ============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FetchCategoryRequest {
    #[prost(int64, tag = "1")]
    pub category_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddCategoryRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, optional, tag = "2")]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModifyCategoryRequest {
    #[prost(int64, tag = "1")]
    pub category_id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, optional, tag = "3")]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveCategoryRequest {
    #[prost(int64, tag = "1")]
    pub category_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FindByNameRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CategoryData {
    #[prost(int64, tag = "1")]
    pub category_id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, optional, tag = "3")]
    pub description: Option<String>,
    #[prost(int64, repeated, tag = "4")]
    pub product_ids: Vec<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CategoriesList {
    #[prost(message, repeated, tag = "1")]
    pub categories: Vec<CategoryData>,
}

// ============================================================================
// Errors
// ============================================================================

/// Carried in the details of every failing status
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ErrorDetails {
    #[prost(string, tag = "1")]
    pub reason: String,
    #[prost(message, repeated, tag = "2")]
    pub field_violations: Vec<FieldViolation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldViolation {
    #[prost(string, tag = "1")]
    pub field: String,
    #[prost(string, tag = "2")]
    pub description: String,
}

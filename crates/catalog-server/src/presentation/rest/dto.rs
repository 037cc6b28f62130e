use catalog_core::{
    Category, CategoryDraft, CategoryId, FieldViolation, Price, Product, ProductDraft,
    Timestamp, ValidationErrors,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

/// Body of POST /api/products and PUT /api/products/{id}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl ProductRequest {
    /// Required fields that are absent become violations; range rules are
    /// left to the service
    pub fn into_draft(self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.price.is_none() {
            errors.add("price", "must not be null");
        }
        if self.stock_quantity.is_none() {
            errors.add("stockQuantity", "must not be null");
        }
        match (self.price, self.stock_quantity) {
            (Some(price), Some(stock_quantity)) => Ok(ProductDraft {
                name: self.name,
                description: self.description,
                price,
                stock_quantity,
                category_id: self.category_id.map(CategoryId),
            }),
            _ => Err(errors),
        }
    }
}

/// Body of POST, PUT and PATCH on /api/categories
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CategoryRequest> for CategoryDraft {
    fn from(req: CategoryRequest) -> Self {
        CategoryDraft::new(req.name, req.description)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshQuery {
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceQuery {
    pub price: Price,
}

// ============================================================================
// Responses
// ============================================================================

/// Product representation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub stock_quantity: i32,
    pub in_stock: bool,
    pub category_id: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let in_stock = product.in_stock();
        let (external_id, rating, rating_count, image_url) = match product.enrichment {
            Some(e) => (Some(e.external_id), e.rating, e.rating_count, e.image_url),
            None => (None, None, None, None),
        };
        ProductResponse {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            price: product.price,
            stock_quantity: product.stock_quantity,
            in_stock,
            category_id: product.category_id.map(CategoryId::value),
            created_at: product.created_at,
            updated_at: product.updated_at,
            external_id,
            rating,
            rating_count,
            image_url,
        }
    }
}

/// Category representation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub product_ids: Vec<i64>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id.value(),
            name: category.name,
            description: category.description,
            product_ids: category.product_ids.iter().map(|id| id.value()).collect(),
        }
    }
}

pub fn products(list: Vec<Product>) -> Vec<ProductResponse> {
    list.into_iter().map(ProductResponse::from).collect()
}

pub fn categories(list: Vec<Category>) -> Vec<CategoryResponse> {
    list.into_iter().map(CategoryResponse::from).collect()
}

/// Error body shared by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: Timestamp,
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<FieldViolation>>,
}

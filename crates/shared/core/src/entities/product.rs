use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Enrichment;
use crate::validation::ValidationErrors;
use crate::values::{CategoryId, Price, ProductId, Timestamp};

/// Longest accepted product description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Caller-supplied fields of a product, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub stock_quantity: i32,
    pub category_id: Option<CategoryId>,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "must not be blank");
        }
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                errors.add(
                    "description",
                    format!("must be at most {} characters", MAX_DESCRIPTION_LEN),
                );
            }
        }
        if self.price < Decimal::ZERO {
            errors.add("price", "must not be negative");
        }
        if self.stock_quantity < 0 {
            errors.add("stockQuantity", "must not be negative");
        }

        errors.into_result()
    }
}

/// A persisted product
///
/// `in_stock` is not stored; it is derived from `stock_quantity` on every
/// read, so it can never disagree with the stock level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub stock_quantity: i32,
    /// Non-owning back-reference to the parent category
    pub category_id: Option<CategoryId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub enrichment: Option<Enrichment>,
}

impl Product {
    /// Build a new product; both timestamps are the mutation time
    pub fn create(id: ProductId, draft: ProductDraft, now: Timestamp) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock_quantity: draft.stock_quantity,
            category_id: draft.category_id,
            created_at: now,
            updated_at: now,
            enrichment: None,
        }
    }

    /// Replace every caller-owned field; identity, `created_at` and
    /// enrichment survive
    pub fn revise(&mut self, draft: ProductDraft, now: Timestamp) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.stock_quantity = draft.stock_quantity;
        self.category_id = draft.category_id;
        self.updated_at = now;
    }

    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Case-insensitive substring match on the display name
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    pub fn enrich(&mut self, enrichment: Enrichment) {
        self.enrichment = Some(enrichment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn draft(stock: i32) -> ProductDraft {
        ProductDraft {
            name: "Laptop".into(),
            description: Some("High-performance laptop".into()),
            price: dec!(999.99),
            stock_quantity: stock,
            category_id: Some(CategoryId(1)),
        }
    }

    #[test]
    fn test_create_sets_both_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let product = Product::create(ProductId(1), draft(10), now);

        assert_eq!(product.created_at, now);
        assert_eq!(product.updated_at, now);
        assert!(product.in_stock());
        assert!(product.enrichment.is_none());
    }

    #[test]
    fn test_revise_recomputes_in_stock_and_updated_at() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let later = created + Duration::minutes(5);
        let mut product = Product::create(ProductId(1), draft(10), created);

        product.revise(draft(0), later);

        assert!(!product.in_stock());
        assert_eq!(product.created_at, created);
        assert_eq!(product.updated_at, later);
    }

    #[test]
    fn test_revise_keeps_enrichment() {
        let now = Utc::now();
        let mut product = Product::create(ProductId(1), draft(1), now);
        product.enrich(Enrichment {
            external_id: "9".into(),
            rating: Some(3.9),
            rating_count: Some(120),
            image_url: None,
        });

        product.revise(draft(2), now);
        assert_eq!(product.enrichment.map(|e| e.external_id), Some("9".into()));
    }

    #[test]
    fn test_validation_collects_all_violations() {
        let bad = ProductDraft {
            name: " ".into(),
            description: Some("x".repeat(MAX_DESCRIPTION_LEN + 1)),
            price: dec!(-0.01),
            stock_quantity: -1,
            category_id: None,
        };

        let errors = bad.validate().unwrap_err();
        let fields: Vec<&str> = errors
            .violations()
            .iter()
            .map(|v| v.field.as_str())
            .collect();
        assert_eq!(fields, vec!["name", "description", "price", "stockQuantity"]);
    }

    #[test]
    fn test_zero_price_and_stock_are_valid() {
        let free = ProductDraft {
            price: dec!(0),
            ..draft(0)
        };
        assert!(free.validate().is_ok());
    }

    #[test]
    fn test_name_contains_ignores_case() {
        let product = Product::create(ProductId(1), draft(1), Utc::now());
        assert!(product.name_contains("LAP"));
        assert!(!product.name_contains("phone"));
    }
}

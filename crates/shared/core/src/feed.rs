//! Records of the third-party product feed.
//!
//! Read-only and never persisted as-is; only the enrichment-relevant fields
//! survive into a [`crate::Product`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product as listed by the external feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalProduct {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<FeedRating>,
}

/// Rating summary of a feed record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedRating {
    pub rate: f64,
    pub count: u32,
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::feed::ExternalProduct;

/// Upper bound of a feed rating average
pub const MAX_RATING: f64 = 5.0;

/// Externally sourced attributes attached to a product after reconciliation
///
/// Never authoritative: each successful match overwrites the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    pub external_id: String,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub image_url: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnrichmentError {
    #[error("rating average {0} outside 0.0..=5.0")]
    RatingOutOfRange(f64),
}

impl Enrichment {
    /// Extract the enrichment-relevant fields of a feed record
    pub fn from_external(record: &ExternalProduct) -> Result<Self, EnrichmentError> {
        if let Some(rating) = &record.rating {
            if !rating.rate.is_finite() || !(0.0..=MAX_RATING).contains(&rating.rate) {
                return Err(EnrichmentError::RatingOutOfRange(rating.rate));
            }
        }

        Ok(Self {
            external_id: record.id.to_string(),
            rating: record.rating.as_ref().map(|r| r.rate),
            rating_count: record.rating.as_ref().map(|r| r.count),
            image_url: record.image.clone(),
        })
    }
}

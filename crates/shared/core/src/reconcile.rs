//! Name-keyed merge of external feed attributes into local products.
//!
//! A pure function from (local snapshot, feed snapshot) to an updated local
//! snapshot. Persistence is the caller's concern.
//!
//! Matching is by normalized display name. Two local products sharing a name
//! both receive the same feed record, whatever their prices; this is a known
//! limitation of name keys.

use std::collections::HashMap;

use crate::entities::{Enrichment, Product};
use crate::feed::ExternalProduct;
use crate::values::ProductId;

/// Case-insensitive, whitespace-normalized match key
pub fn normalize_title(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// What happened to one local product during a run
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Enrichment replaced with the matched feed record's attributes
    Matched { external_id: String },
    /// No feed record carries this name; prior enrichment kept
    Unmatched,
    /// A feed record matched but its attributes were unusable; prior
    /// enrichment kept
    Rejected { reason: String },
}

/// Result of one reconciliation pass
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    /// Updated local snapshot, in input order
    pub products: Vec<Product>,
    /// One outcome per product, in input order
    pub outcomes: Vec<(ProductId, MatchOutcome)>,
}

impl Reconciliation {
    /// Enrichment writes for every matched product
    pub fn enrichments(&self) -> Vec<(ProductId, Enrichment)> {
        self.products
            .iter()
            .zip(&self.outcomes)
            .filter(|(_, (_, outcome))| matches!(outcome, MatchOutcome::Matched { .. }))
            .filter_map(|(product, _)| product.enrichment.clone().map(|e| (product.id, e)))
            .collect()
    }

    pub fn matched(&self) -> usize {
        self.count(|o| matches!(o, MatchOutcome::Matched { .. }))
    }

    pub fn unmatched(&self) -> usize {
        self.count(|o| matches!(o, MatchOutcome::Unmatched))
    }

    pub fn rejected(&self) -> usize {
        self.count(|o| matches!(o, MatchOutcome::Rejected { .. }))
    }

    fn count(&self, pred: impl Fn(&MatchOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Index feed records by normalized title; on duplicates the first record in
/// feed order wins
fn index_feed(feed: &[ExternalProduct]) -> HashMap<String, &ExternalProduct> {
    let mut index = HashMap::with_capacity(feed.len());
    for record in feed {
        let key = normalize_title(&record.title);
        if key.is_empty() {
            continue;
        }
        index.entry(key).or_insert(record);
    }
    index
}

/// Merge feed attributes into the local snapshot
pub fn reconcile(local: Vec<Product>, feed: &[ExternalProduct]) -> Reconciliation {
    let index = index_feed(feed);
    let mut result = Reconciliation {
        products: Vec::with_capacity(local.len()),
        outcomes: Vec::with_capacity(local.len()),
    };

    for mut product in local {
        let outcome = match index.get(&normalize_title(&product.name)) {
            None => MatchOutcome::Unmatched,
            Some(record) => match Enrichment::from_external(record) {
                Ok(enrichment) => {
                    let external_id = enrichment.external_id.clone();
                    product.enrich(enrichment);
                    MatchOutcome::Matched { external_id }
                }
                Err(e) => MatchOutcome::Rejected {
                    reason: e.to_string(),
                },
            },
        };
        result.outcomes.push((product.id, outcome));
        result.products.push(product);
    }

    result
}

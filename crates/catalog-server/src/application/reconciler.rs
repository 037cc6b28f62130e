use catalog_core::{MatchOutcome, reconcile};
use catalog_ports::{ExternalCatalog, ProductRepository};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Counters for one reconciliation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Local products in the snapshot
    pub local: usize,
    /// Records returned by the feed
    pub feed: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub rejected: usize,
    /// Enrichments persisted
    pub written: usize,
    /// Matched products deleted before their enrichment could be written
    pub vanished: usize,
}

/// Enriches local products with attributes from the external feed
///
/// A run never fails: an unreachable or empty feed, or a store that cannot
/// be read, ends the run with whatever has been counted so far.
pub struct Reconciler<P, F>
where
    P: ProductRepository,
    F: ExternalCatalog,
{
    products: Arc<P>,
    feed: Arc<F>,
}

impl<P, F> Clone for Reconciler<P, F>
where
    P: ProductRepository,
    F: ExternalCatalog,
{
    fn clone(&self) -> Self {
        Self {
            products: Arc::clone(&self.products),
            feed: Arc::clone(&self.feed),
        }
    }
}

impl<P, F> Reconciler<P, F>
where
    P: ProductRepository,
    F: ExternalCatalog,
{
    pub fn new(products: Arc<P>, feed: Arc<F>) -> Self {
        Self { products, feed }
    }

    pub async fn run(&self) -> SyncReport {
        let mut report = SyncReport::default();

        let feed = self.feed.list_products().await;
        report.feed = feed.len();
        if feed.is_empty() {
            info!("External feed returned no products, nothing to reconcile");
            return report;
        }

        let local = match self.products.list_products().await {
            Ok(local) => local,
            Err(e) => {
                warn!(error = %e, "Could not read local products for reconciliation");
                return report;
            }
        };
        report.local = local.len();

        let result = reconcile(local, &feed);
        for (id, outcome) in &result.outcomes {
            match outcome {
                MatchOutcome::Matched { external_id } => {
                    debug!(product_id = %id, external_id, "Matched product to feed record");
                }
                MatchOutcome::Unmatched => {
                    debug!(product_id = %id, "No feed record for product");
                }
                MatchOutcome::Rejected { reason } => {
                    warn!(product_id = %id, reason, "Skipped enrichment for product");
                }
            }
        }
        report.matched = result.matched();
        report.unmatched = result.unmatched();
        report.rejected = result.rejected();

        let writes = result.enrichments();
        if !writes.is_empty() {
            match self.products.write_enrichments(writes).await {
                Ok(outcome) => {
                    for id in &outcome.vanished {
                        debug!(product_id = %id, "Product deleted before enrichment was written");
                    }
                    report.written = outcome.written;
                    report.vanished = outcome.vanished.len();
                }
                Err(e) => warn!(error = %e, "Failed to persist enrichments"),
            }
        }

        info!(
            local = report.local,
            feed = report.feed,
            matched = report.matched,
            unmatched = report.unmatched,
            rejected = report.rejected,
            written = report.written,
            vanished = report.vanished,
            "External feed reconciliation finished"
        );
        report
    }
}

mod category;
mod enrichment;
mod product;

pub use category::{Category, CategoryDraft};
pub use enrichment::{Enrichment, EnrichmentError, MAX_RATING};
pub use product::{MAX_DESCRIPTION_LEN, Product, ProductDraft};

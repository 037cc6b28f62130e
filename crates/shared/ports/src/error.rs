use catalog_core::CatalogError;
use thiserror::Error;

/// Failures reported by a catalog store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found with {field}: {value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound {
                entity,
                field,
                value,
            } => CatalogError::NotFound {
                resource: entity,
                field,
                value,
            },
            StoreError::Conflict(msg) => CatalogError::Conflict(msg),
            StoreError::Unavailable(msg) => CatalogError::Internal(msg),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

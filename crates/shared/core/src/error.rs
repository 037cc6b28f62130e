use thiserror::Error;

use crate::validation::ValidationErrors;

/// Generic message handed to callers for faults they cannot act on
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Service-level failures, independent of any wire protocol
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("{resource} not found with {field}: {value}")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification both protocol adapters translate from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    Conflict,
    Internal,
}

impl CatalogError {
    pub fn not_found(resource: &'static str, field: &'static str, value: impl ToString) -> Self {
        CatalogError::NotFound {
            resource,
            field,
            value: value.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::Validation(_) => ErrorKind::InvalidInput,
            CatalogError::Conflict(_) => ErrorKind::Conflict,
            CatalogError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Message safe to return to a caller; internal detail is withheld
    pub fn public_message(&self) -> String {
        match self {
            CatalogError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            CatalogError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(errors: ValidationErrors) -> Self {
        CatalogError::Validation(errors)
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_resource_and_id() {
        let err = CatalogError::not_found("Product", "id", 42);
        assert_eq!(err.to_string(), "Product not found with id: 42");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_internal_detail_is_not_public() {
        let err = CatalogError::Internal("connection pool exhausted".into());
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
        assert!(err.to_string().contains("pool exhausted"));
    }

    #[test]
    fn test_validation_kind() {
        let err: CatalogError = ValidationErrors::single("price", "must not be negative").into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.violations().map(|v| v.violations().len()), Some(1));
    }
}

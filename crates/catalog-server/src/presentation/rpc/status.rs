use bytes::Bytes;
use catalog_core::{CatalogError, ErrorKind, ValidationErrors};
use prost::Message;
use tonic::{Code, Status};

use super::messages::{ErrorDetails, FieldViolation};

/// Translate a service failure into an RPC status with encoded details
pub fn to_status(err: CatalogError) -> Status {
    let code = match err.kind() {
        ErrorKind::NotFound => Code::NotFound,
        ErrorKind::InvalidInput => Code::InvalidArgument,
        ErrorKind::Conflict => Code::AlreadyExists,
        ErrorKind::Internal => {
            tracing::error!(error = %err, "RPC failed with internal error");
            Code::Internal
        }
    };

    let message = err.public_message();
    let details = ErrorDetails {
        reason: message.clone(),
        field_violations: err
            .violations()
            .map(|v| {
                v.violations()
                    .iter()
                    .map(|fv| FieldViolation {
                        field: fv.field.clone(),
                        description: fv.description.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
    };

    Status::with_details(code, message, Bytes::from(details.encode_to_vec()))
}

/// Invalid request fields caught before reaching the service
pub fn invalid_argument(errors: ValidationErrors) -> Status {
    to_status(CatalogError::Validation(errors))
}

/// Decode the details a failing status carries, if any
pub fn error_details(status: &Status) -> Option<ErrorDetails> {
    ErrorDetails::decode(status.details()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::INTERNAL_ERROR_MESSAGE;

    #[test]
    fn test_codes_follow_error_kind() {
        let cases = [
            (CatalogError::not_found("Category", "id", 3), Code::NotFound),
            (
                ValidationErrors::single("name", "must not be blank").into(),
                Code::InvalidArgument,
            ),
            (CatalogError::Conflict("taken".into()), Code::AlreadyExists),
            (CatalogError::Internal("boom".into()), Code::Internal),
        ];

        for (err, code) in cases {
            assert_eq!(to_status(err).code(), code);
        }
    }

    #[test]
    fn test_details_round_trip_violations() {
        let mut errors = ValidationErrors::new();
        errors.add("price", "must not be negative");
        errors.add("stockQuantity", "must not be negative");

        let status = invalid_argument(errors);
        let details = error_details(&status).unwrap();

        assert_eq!(details.reason, status.message());
        assert_eq!(details.field_violations.len(), 2);
        assert_eq!(details.field_violations[1].field, "stockQuantity");
    }

    #[test]
    fn test_internal_detail_withheld() {
        let status = to_status(CatalogError::Internal("secret dsn".into()));
        assert_eq!(status.message(), INTERNAL_ERROR_MESSAGE);
        assert_eq!(error_details(&status).unwrap().reason, INTERNAL_ERROR_MESSAGE);
    }
}

//! Mapping from domain errors to HTTP responses

use actix_web::HttpResponse;

use jp_core::errors::{DomainError, VerificationError};
use jp_shared::types::StatusResponse;

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Store faults deliberately surface a fixed message; the underlying cause
/// goes to the log, never to the client.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match error {
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(StatusResponse::fail("User not found"))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(StatusResponse::fail(message))
        }
        DomainError::Verification(VerificationError::InvalidCode)
        | DomainError::Verification(VerificationError::CodeExpired) => HttpResponse::BadRequest()
            .json(StatusResponse::fail("Invalid or expired verification code")),
        DomainError::Persistence { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(StatusResponse::fail(
                "An error occurred while processing your request",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = handle_domain_error(DomainError::NotFound {
            resource: "Account".to_string(),
        });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_persistence_maps_to_500() {
        let response = handle_domain_error(DomainError::Persistence {
            message: "connection reset".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_code_maps_to_400() {
        let response = handle_domain_error(VerificationError::InvalidCode.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

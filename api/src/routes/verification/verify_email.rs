use actix_web::{web, HttpResponse};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::dto::verify_dto::VerifyEmailRequest;
use crate::handlers::error::handle_domain_error;

use jp_core::repositories::AccountRepository;
use jp_core::services::verification::{CodeVerifier, VerificationService, VerifyOutcome};
use jp_shared::types::StatusResponse;

/// Application state that holds shared services
pub struct AppState<A, V>
where
    A: AccountRepository,
    V: CodeVerifier,
{
    pub verification_service: Arc<VerificationService<A, V>>,
}

/// Handler for POST /verify-email
///
/// Runs the verification attempt gate before checking the submitted code.
/// The gate counts the attempt, resets stale counters, and blocks the
/// account after too many failures.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "jane@example.com",
///     "code": "123456"
/// }
/// ```
///
/// # Responses
/// - 200: `{ "success": true, "message": "Email verified successfully" }`
/// - 400: invalid request data, or wrong/expired code
/// - 404: `{ "success": false, "message": "User not found" }`
/// - 429: `{ "success": false, "message": "Too many verification attempts.
///   Please try again in {minutes} minutes" }`
/// - 500: `{ "success": false, "message": "An error occurred while
///   processing your request" }`
pub async fn verify_email<A, V>(
    state: web::Data<AppState<A, V>>,
    request: web::Json<VerifyEmailRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    V: CodeVerifier + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(StatusResponse::fail("Invalid request data"));
    }

    match state
        .verification_service
        .verify_email(&request.email, &request.code, Utc::now())
        .await
    {
        Ok(VerifyOutcome::Verified) => {
            HttpResponse::Ok().json(StatusResponse::ok("Email verified successfully"))
        }
        Ok(VerifyOutcome::InvalidCode) => HttpResponse::BadRequest()
            .json(StatusResponse::fail("Invalid or expired verification code")),
        Ok(VerifyOutcome::NotFound) => {
            HttpResponse::NotFound().json(StatusResponse::fail("User not found"))
        }
        // The two blocked outcomes share a message template but source the
        // minute count differently: an active block computes the remainder,
        // a threshold crossing quotes the policy's block duration.
        Ok(VerifyOutcome::Blocked { retry_after_minutes }) => {
            HttpResponse::TooManyRequests().json(StatusResponse::fail(format!(
                "Too many verification attempts. Please try again in {} minutes",
                retry_after_minutes
            )))
        }
        Ok(VerifyOutcome::ThresholdBlocked { block_minutes }) => {
            HttpResponse::TooManyRequests().json(StatusResponse::fail(format!(
                "Too many verification attempts. Please try again in {} minutes",
                block_minutes
            )))
        }
        Err(error) => handle_domain_error(error),
    }
}

//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use actix_web::{body::MessageBody, middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::verification::{verify_email::verify_email, AppState};

use jp_core::repositories::AccountRepository;
use jp_core::services::verification::CodeVerifier;
use jp_shared::types::StatusResponse;

/// Create and configure the application with all dependencies
pub fn create_app<A, V>(
    app_state: web::Data<AppState<A, V>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    V: CodeVerifier + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Verification endpoint, mounted at the root per the frontend
        // wire contract
        .route("/verify-email", web::post().to(verify_email::<A, V>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "jobpath-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(StatusResponse::fail(
        "The requested resource was not found",
    ))
}

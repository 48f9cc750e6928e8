use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use jp_core::repositories::MockAccountRepository;
use jp_core::services::verification::{GatePolicy, MockCodeVerifier, VerificationService};
use jp_shared::config::VerificationLimits;

mod app;
mod dto;
mod handlers;
mod middleware;
mod routes;

use app::create_app;
use routes::verification::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting JobPath API server");

    let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = env::var("SERVER_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("SERVER_PORT must be a valid port number");

    let bind_address = format!("{}:{}", server_host, server_port);
    info!("Server will bind to: {}", bind_address);

    // Composition root. The in-memory repository and code verifier stand in
    // for the document store and the code-delivery pipeline; deployments
    // swap in real implementations of the same traits.
    let limits = match env::var("ENVIRONMENT").as_deref() {
        Ok("production") => VerificationLimits::production(),
        Ok("development") => VerificationLimits::development(),
        _ => VerificationLimits::default(),
    };
    let accounts = Arc::new(MockAccountRepository::new());
    let verifier = Arc::new(MockCodeVerifier::new());
    let verification_service = Arc::new(VerificationService::new(
        Arc::clone(&accounts),
        Arc::clone(&verifier),
        GatePolicy::from(&limits),
    ));

    let app_state = web::Data::new(AppState {
        verification_service,
    });

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

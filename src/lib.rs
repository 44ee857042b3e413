pub mod config;
pub mod contact;
pub mod email;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::AppState;

/// Create the app router for testing
///
/// Builds the Axum router with all routes configured, useful for
/// integration testing without starting the full server.
pub fn create_app(email_service: email::EmailService) -> axum::Router {
    routes::router(AppState { email_service })
}

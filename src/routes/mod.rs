use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

mod contact;
mod health;

use crate::email::EmailService;

#[derive(Clone)]
pub struct AppState {
    pub email_service: EmailService,
}

/// Build the application router.
///
/// The permissive CORS layer answers OPTIONS preflights with 200 and
/// stamps every response, so the browser-hosted portfolio can submit
/// cross-origin. Non-POST requests to the contact endpoint get 405 from
/// the method router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::submit))
        .layer(cors)
        .with_state(state)
}

use crate::{
    ApiError, AppState, complete_task, health, leaderboard, login, register, set_referrer, status,
};

use std::panic::Location;
use std::time::Duration;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    routing::{get, patch, post},
};
use error_location::ErrorLocation;
use tower::ServiceBuilder;
use tower::timeout::error::Elapsed;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints.
///
/// Requests running longer than `request_timeout` are dropped, which cancels
/// any in-flight store call and rolls back an open transaction.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Auth
        .route("/login/{id}", get(login))
        .route("/register", post(register))
        // Ledger
        .route("/users/leaderboard", get(leaderboard))
        .route("/users/{id}/status", get(status))
        .route("/users/{id}/task/complete", patch(complete_task))
        .route("/users/{id}/referrer", patch(set_referrer))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn handle_middleware_error(error: BoxError) -> ApiError {
    if error.is::<Elapsed>() {
        log::warn!("Request exceeded its deadline");
        ApiError::Timeout {
            location: ErrorLocation::from(Location::caller()),
        }
    } else {
        ApiError::internal(format!("Unhandled middleware error: {}", error))
    }
}

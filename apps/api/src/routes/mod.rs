pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::auth::handlers as auth;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api", get(health::liveness_handler))
        .route("/api/", get(health::liveness_handler))
        // Analysis API
        .route("/api/analyze-resume", post(analysis::handle_analyze_resume))
        .route("/api/analyses", get(analysis::handle_list_analyses))
        // Accounts
        .route("/api/signup", post(auth::handle_signup))
        .route("/api/login", post(auth::handle_login))
        .with_state(state)
}

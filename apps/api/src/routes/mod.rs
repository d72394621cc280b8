pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::careers::handlers as careers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career advice
        .route("/api/assessment", post(careers::handle_assessment))
        .route("/api/resources", post(careers::handle_resources))
        .route(
            "/api/career-categories",
            get(careers::handle_career_categories),
        )
        // Accounts
        .route("/api/register", post(auth::handle_register))
        .route("/api/login", post(auth::handle_login))
        .route("/api/user", get(auth::handle_current_user))
        .fallback(not_found)
        .with_state(state)
}

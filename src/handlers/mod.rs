//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod courses;
pub mod health;

use axum::{middleware, Router};

use crate::{
    middleware::{auth_middleware, logging_middleware},
    state::AppState,
};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new().merge(health::routes()).merge(courses::routes())
}

/// Build the application router mounted under the versioned API prefix
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(crate::constants::API_BASE_PATH, routes())
        // The last layer added runs first, so the caller is known when logging runs
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}

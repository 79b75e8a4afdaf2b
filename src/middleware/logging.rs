//! Logging middleware

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

use super::AuthenticatedUser;

/// Request logging middleware
///
/// Runs inside the auth layer so the caller, when known, is logged too.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let caller = request
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|u| u.id.to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if response.status().is_server_error() {
        warn!(%method, %path, %caller, status, %duration_ms, "Request failed");
    } else {
        info!(%method, %path, %caller, status, %duration_ms, "Request completed");
    }

    response
}

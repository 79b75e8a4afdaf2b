//! Authentication middleware
//!
//! The middleware attaches the caller to the request when a valid bearer
//! token is present. Handlers that require a caller take an
//! [`AuthenticatedUser`] argument, which rejects with 401 otherwise.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from JWT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub role: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Resolve the caller from an `Authorization` header value
fn authenticate(header: &str, secret: &str) -> Result<AuthenticatedUser, AppError> {
    let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;
    let claims = AuthService::verify_token(token, secret)?;
    let id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    Ok(AuthenticatedUser {
        id,
        role: claims.role,
    })
}

/// Authentication middleware (doesn't fail if no token)
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if let Some(header) = header {
        match authenticate(header, &state.config().jwt.secret) {
            Ok(user) => {
                debug!(path = %request.uri().path(), user_id = %user.id, role = %user.role, "User authenticated");
                request.extensions_mut().insert(user);
            }
            Err(e) => {
                debug!(path = %request.uri().path(), error = ?e, "Ignoring invalid credentials");
            }
        }
    }

    next.run(request).await
}

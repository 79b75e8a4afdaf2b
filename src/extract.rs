//! Request extractors

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::{AppError, AppResult};

/// JSON request body kept as raw bytes.
///
/// Nothing is parsed during extraction, so the target lookup and the
/// ownership check run before the payload is looked at.
#[derive(Debug, Clone, Default)]
pub struct JsonBody(Bytes);

impl JsonBody {
    /// Deserialize the body. An empty body reads as `{}`.
    pub fn parse<T: DeserializeOwned>(&self) -> AppResult<T> {
        let bytes: &[u8] = if self.0.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &self.0
        };

        serde_json::from_slice(bytes).map_err(|e| match e.classify() {
            Category::Data => AppError::Validation(format!("Invalid request body: {}", e)),
            _ => AppError::InvalidInput(format!("Malformed JSON body: {}", e)),
        })
    }
}

impl From<Bytes> for JsonBody {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state).await?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        weeks: Option<i32>,
    }

    #[test]
    fn empty_body_is_an_empty_object() {
        let body = JsonBody::from(Bytes::from_static(b"  \n"));
        assert_eq!(body.parse::<Payload>().unwrap(), Payload { weeks: None });
    }

    #[test]
    fn wrong_types_are_validation_errors() {
        let body = JsonBody::from(Bytes::from_static(br#"{"weeks":"abc"}"#));
        assert!(matches!(body.parse::<Payload>(), Err(AppError::Validation(_))));
    }

    #[test]
    fn broken_json_is_invalid_input() {
        let body = JsonBody::from(Bytes::from_static(br#"{"weeks": "#));
        assert!(matches!(body.parse::<Payload>(), Err(AppError::InvalidInput(_))));
    }
}

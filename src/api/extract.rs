//! Request body and path extraction.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that tolerates a missing body.
///
/// The body is parsed as JSON whatever the `Content-Type`. An empty or
/// whitespace-only body yields `T::default()`. Parse failures are rejected
/// with [`AppError::Validation`] so they share the `{"message": ...}` shape.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        parse_body(&bytes).map(Self)
    }
}

/// Tutorial id taken from the `{id}` path segment.
///
/// Segments that do not decode are rejected with [`AppError::Validation`]
/// instead of axum's plain-text rejection.
#[derive(Debug)]
pub struct TutorialId(pub String);

impl<S> FromRequestParts<S> for TutorialId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        Ok(Self(id))
    }
}

fn parse_body<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(bytes)
        .map_err(|e| AppError::bad_request(format!("Invalid JSON body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Body {
        title: Option<String>,
    }

    #[test]
    fn test_empty_body_is_default() {
        assert_eq!(parse_body::<Body>(b"").unwrap(), Body::default());
        assert_eq!(parse_body::<Body>(b"  \n").unwrap(), Body::default());
    }

    #[test]
    fn test_valid_body_parses() {
        let body = parse_body::<Body>(br#"{"title":"ionic"}"#).unwrap();
        assert_eq!(body.title.as_deref(), Some("ionic"));
    }

    #[test]
    fn test_malformed_body_is_validation_error() {
        let err = parse_body::<Body>(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.starts_with("Invalid JSON body")));
    }
}

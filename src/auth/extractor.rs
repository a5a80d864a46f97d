// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for bearer tokens.
//!
//! ```rust,ignore
//! async fn my_handler(BearerToken(token): BearerToken) -> impl IntoResponse {
//!     // token is the raw access token
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Access token taken from the `Authorization` header.
///
/// The `Bearer ` prefix is removed when present; a header without it is used
/// as-is. Bytes outside visible ASCII are kept (invalid UTF-8 is replaced)
/// and left for the identity provider to reject. Only a missing header or an
/// empty token is rejected here, with `401 token not found`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
            .unwrap_or_default();

        let token = header.strip_prefix(BEARER_PREFIX).unwrap_or(&*header);

        if token.is_empty() {
            return Err(ApiError::token_missing());
        }

        Ok(BearerToken(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request, StatusCode};

    async fn extract_raw(header: Option<HeaderValue>) -> Result<BearerToken, ApiError> {
        let mut builder = Request::builder().uri("/user");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let mut parts = builder.body(()).unwrap().into_parts().0;
        BearerToken::from_request_parts(&mut parts, &()).await
    }

    async fn extract(header: Option<&str>) -> Result<BearerToken, ApiError> {
        extract_raw(header.map(|v| HeaderValue::from_str(v).unwrap())).await
    }

    #[tokio::test]
    async fn strips_bearer_prefix() {
        let token = extract(Some("Bearer abc.def.ghi")).await.unwrap();
        assert_eq!(token, BearerToken("abc.def.ghi".to_string()));
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let err = extract(None).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "token not found");
    }

    #[tokio::test]
    async fn empty_bearer_is_rejected() {
        let err = extract(Some("Bearer ")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "token not found");
    }

    #[tokio::test]
    async fn header_without_prefix_is_used_verbatim() {
        let token = extract(Some("raw-token")).await.unwrap();
        assert_eq!(token.0, "raw-token");
    }

    #[tokio::test]
    async fn prefix_is_case_sensitive() {
        let token = extract(Some("bearer abc")).await.unwrap();
        assert_eq!(token.0, "bearer abc");
    }

    #[tokio::test]
    async fn non_ascii_token_is_passed_through() {
        let value = HeaderValue::from_bytes("Bearer tök".as_bytes()).unwrap();
        let token = extract_raw(Some(value)).await.unwrap();
        assert_eq!(token.0, "tök");
    }

    #[tokio::test]
    async fn invalid_utf8_token_is_not_treated_as_missing() {
        let value = HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap();
        let token = extract_raw(Some(value)).await.unwrap();
        assert!(!token.0.is_empty());
    }
}

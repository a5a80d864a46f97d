// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JSON body extractor with field validation.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that must deserialize into `T` and pass [`Validate`].
///
/// Unlike `axum::Json` the `Content-Type` header is not checked. Every
/// rejection becomes `400 invalid json`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, "request body unreadable");
            ApiError::invalid_request()
        })?;

        let value: T = serde_json::from_slice(&body).map_err(|e| {
            debug!(error = %e, "request body rejected");
            ApiError::invalid_request()
        })?;

        value.validate().map_err(|e| {
            debug!(error = %e, "request body failed validation");
            ApiError::invalid_request()
        })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Credentials;
    use axum::{
        body::Body,
        http::{self, StatusCode},
    };

    async fn extract(content_type: &str, body: &str) -> Result<ValidJson<Credentials>, ApiError> {
        let req = http::Request::builder()
            .method("POST")
            .uri("/user/login")
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        ValidJson::<Credentials>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn accepts_complete_body() {
        let ValidJson(credentials) =
            extract("application/json", r#"{"username":"ann","password":"pw"}"#)
                .await
                .unwrap();
        assert_eq!(credentials, Credentials::new("ann", "pw"));
    }

    #[tokio::test]
    async fn rejects_missing_field() {
        let err = extract("application/json", r#"{"username":"ann"}"#)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "invalid json");
    }

    #[tokio::test]
    async fn rejects_empty_field() {
        let err = extract("application/json", r#"{"username":"","password":"pw"}"#)
            .await
            .unwrap_err();
        assert_eq!(err.message, "invalid json");
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let err = extract("application/json", "{not json").await.unwrap_err();
        assert_eq!(err.message, "invalid json");
    }

    #[tokio::test]
    async fn ignores_content_type() {
        let ValidJson(credentials) = extract("text/plain", r#"{"username":"ann","password":"pw"}"#)
            .await
            .unwrap();
        assert_eq!(credentials.username, "ann");
    }

    #[tokio::test]
    async fn rejects_empty_body() {
        let err = extract("application/json", "").await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INVALID_REQUEST_MESSAGE: &str = "invalid json";
pub const AUTHENTICATION_FAILED_MESSAGE: &str = "could not sign in";
pub const TOKEN_MISSING_MESSAGE: &str = "token not found";
pub const USER_LOOKUP_FAILED_MESSAGE: &str = "could not get user";

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Request body missing, malformed or failing validation.
    pub fn invalid_request() -> Self {
        Self::bad_request(INVALID_REQUEST_MESSAGE)
    }

    /// The identity provider rejected the sign-in.
    pub fn authentication_failed() -> Self {
        Self::bad_request(AUTHENTICATION_FAILED_MESSAGE)
    }

    /// No bearer token on a request that needs one.
    pub fn token_missing() -> Self {
        Self::unauthorized(TOKEN_MISSING_MESSAGE)
    }

    /// The identity provider rejected the access token.
    pub fn user_lookup_failed() -> Self {
        Self::bad_request(USER_LOOKUP_FAILED_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User endpoints.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

use super::extract::ValidJson;
use crate::{
    auth::BearerToken,
    error::ApiError,
    models::{Credentials, LoginResponse, UserProfile, UserResponse},
    state::AppState,
};

/// Sign in with username and password.
///
/// Returns the access and ID tokens issued by the identity provider.
#[utoipa::path(
    post,
    path = "/user/login",
    tag = "Users",
    request_body = Credentials,
    responses(
        (status = 201, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Malformed body or sign-in rejected"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(credentials): ValidJson<Credentials>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    let tokens = state.identity.sign_in(&credentials).await.map_err(|e| {
        warn!(username = %credentials.username, error = %e, "sign-in failed");
        ApiError::authentication_failed()
    })?;

    info!(username = %credentials.username, "user signed in");
    Ok((StatusCode::CREATED, Json(tokens.into())))
}

/// Get the user owning the bearer token.
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User information", body = UserResponse),
        (status = 400, description = "Token rejected by the identity provider"),
        (status = 401, description = "Missing bearer token"),
    )
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<UserResponse>, ApiError> {
    let attributes = state.identity.get_user_by_token(&token).await.map_err(|e| {
        warn!(error = %e, "user lookup failed");
        ApiError::user_lookup_failed()
    })?;

    Ok(Json(UserResponse {
        user: UserProfile::from_attributes(&attributes),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        identity::{IdentityError, MockIdentityProvider},
        models::{TokenPair, UserAttribute},
    };

    fn provider_error() -> IdentityError {
        IdentityError::Provider {
            operation: "test",
            message: "NotAuthorizedException: Incorrect username or password.".to_string(),
        }
    }

    fn tokens() -> TokenPair {
        TokenPair {
            access_token: "access".to_string(),
            id_token: "id".to_string(),
            refresh_token: "refresh".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
        }
    }

    #[tokio::test]
    async fn login_returns_created_with_tokens() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_sign_in()
            .withf(|c| c.username == "ann" && c.password == "pw")
            .times(1)
            .returning(|_| Ok(tokens()));

        let (status, Json(body)) = login(
            State(AppState::new(identity)),
            ValidJson(Credentials::new("ann", "pw")),
        )
        .await
        .expect("login succeeds");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.access_token, "access");
        assert_eq!(body.id_token, "id");
    }

    #[tokio::test]
    async fn login_hides_provider_error() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_sign_in()
            .times(1)
            .returning(|_| Err(provider_error()));

        let err = login(
            State(AppState::new(identity)),
            ValidJson(Credentials::new("ann", "wrong")),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "could not sign in");
    }

    #[tokio::test]
    async fn current_user_maps_attributes() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_get_user_by_token()
            .withf(|token| token == "abc")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    UserAttribute::new("sub", "u1"),
                    UserAttribute::new("name", "Ann"),
                    UserAttribute::new("email", "a@x.com"),
                    UserAttribute::new("email_verified", "true"),
                ])
            });

        let Json(body) = get_current_user(
            State(AppState::new(identity)),
            BearerToken("abc".to_string()),
        )
        .await
        .expect("lookup succeeds");

        assert_eq!(
            body.user,
            UserProfile {
                id: "u1".to_string(),
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
                custom_id: String::new(),
                email_verified: true,
            }
        );
    }

    #[tokio::test]
    async fn current_user_hides_provider_error() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_get_user_by_token()
            .times(1)
            .returning(|_| Err(provider_error()));

        let err = get_current_user(
            State(AppState::new(identity)),
            BearerToken("expired".to_string()),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "could not get user");
    }
}

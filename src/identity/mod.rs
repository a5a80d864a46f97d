// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Identity Provider
//!
//! The user directory, password checks and token issuance all live in a
//! managed Cognito user pool. This module wraps the handful of calls the
//! gateway makes against it.
//!
//! ## Flow
//!
//! 1. Sign-in computes a `SECRET_HASH` from the username and app client
//!    credentials, then runs the `USER_PASSWORD_AUTH` flow
//! 2. Current-user lookups exchange an access token for the user's
//!    attribute list
//!
//! Each call is attempted exactly once and nothing is cached between calls.

pub mod cognito;
pub mod secret_hash;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::models::{Credentials, NewUser, TokenPair, UserAttribute};

pub use cognito::CognitoClient;
pub use secret_hash::secret_hash;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider request {operation} failed: {message}")]
    Provider {
        operation: &'static str,
        message: String,
    },

    #[error("identity provider requested challenge {0}")]
    ChallengeRequired(String),

    #[error("identity provider returned an incomplete result: {0}")]
    IncompleteResult(&'static str),

    #[error("secret hash computation failed: {0}")]
    SecretHash(String),
}

/// Operations the gateway needs from the identity provider.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new user. Accepted and ignored.
    async fn sign_up(&self, user: &NewUser) -> Result<(), IdentityError>;

    /// Authenticate with username and password.
    async fn sign_in(&self, credentials: &Credentials) -> Result<TokenPair, IdentityError>;

    /// Fetch the attributes of the user owning `access_token`.
    async fn get_user_by_token(&self, access_token: &str)
        -> Result<Vec<UserAttribute>, IdentityError>;

    /// Set a permanent password for the user, bypassing the change flow.
    async fn update_password(&self, credentials: &Credentials) -> Result<(), IdentityError>;
}

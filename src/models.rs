// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the HTTP API plus the plain data the
//! identity provider hands back. Nothing here is persisted: every value lives
//! for the duration of one request.
//!
//! ## Model Categories
//!
//! - **Credentials**: username/password pairs used for sign-in and
//!   administrative password changes
//! - **Tokens**: the token set issued on a successful sign-in
//! - **Profiles**: the typed user record assembled from provider attributes

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// =============================================================================
// Credentials
// =============================================================================

/// Username and password submitted to `POST /user/login`.
///
/// Deserialize-only: holds a password and is never written out.
#[derive(Clone, Deserialize, ToSchema, Validate, PartialEq, Eq)]
pub struct Credentials {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Registration payload accepted by the sign-up capability.
#[derive(Clone, Deserialize, ToSchema, Validate, PartialEq, Eq)]
pub struct NewUser {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Tokens
// =============================================================================

/// Tokens issued by the identity provider for one successful sign-in.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i32,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

/// Response body for a successful sign-in.
///
/// Only the access and ID tokens are returned; the refresh token and expiry
/// stay on the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
    pub id_token: String,
}

impl From<TokenPair> for LoginResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            id_token: tokens.id_token,
        }
    }
}

// =============================================================================
// Profiles
// =============================================================================

pub const ATTR_SUB: &str = "sub";
pub const ATTR_NAME: &str = "name";
pub const ATTR_EMAIL: &str = "email";
pub const ATTR_EMAIL_VERIFIED: &str = "email_verified";
pub const ATTR_CUSTOM_ID: &str = "custom:custom_id";

/// One name/value pair from the provider's user attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAttribute {
    pub name: String,
    pub value: Option<String>,
}

impl UserAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// The current user as returned by `GET /user`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub custom_id: String,
    pub email_verified: bool,
}

impl UserProfile {
    /// Build a profile from the provider's attribute list.
    ///
    /// Unknown attributes are ignored and missing ones keep their default.
    /// An `email_verified` value that is not a recognised boolean leaves the
    /// flag untouched.
    pub fn from_attributes(attributes: &[UserAttribute]) -> Self {
        let mut profile = Self::default();

        for attribute in attributes {
            let Some(value) = attribute.value.as_deref() else {
                continue;
            };

            match attribute.name.as_str() {
                ATTR_SUB => profile.id = value.to_string(),
                ATTR_NAME => profile.name = value.to_string(),
                ATTR_EMAIL => profile.email = value.to_string(),
                ATTR_CUSTOM_ID => profile.custom_id = value.to_string(),
                ATTR_EMAIL_VERIFIED => {
                    if let Some(verified) = parse_bool(value) {
                        profile.email_verified = verified;
                    }
                }
                _ => {}
            }
        }

        profile
    }
}

/// Response body wrapper for `GET /user`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserResponse {
    pub user: UserProfile,
}

/// Lenient boolean parsing for attribute values.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

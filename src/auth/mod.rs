// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Access tokens are issued and verified by the Cognito user pool, not by
//! this service. The gateway only pulls the token out of the request and
//! hands it to the identity provider.
//!
//! ## Auth Flow
//!
//! 1. Client signs in via `POST /user/login` and receives an access token
//! 2. Client sends `Authorization: Bearer <access token>`
//! 3. The `BearerToken` extractor strips the `Bearer ` prefix
//! 4. The identity provider resolves the token to the user's attributes

pub mod extractor;

pub use extractor::BearerToken;

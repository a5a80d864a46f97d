// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User Pool Gateway - HTTP front door for a Cognito user pool
//!
//! Exposes password sign-in and "who am I" endpoints and forwards both to
//! the managed identity provider. Credentials, tokens and profiles pass
//! through; nothing is stored.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Bearer token extraction
//! - `config` - Environment configuration
//! - `identity` - Identity provider trait and Cognito client
//! - `logging` - Tracing subscriber setup

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod models;
pub mod state;

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! immutable [`AppConfig`] loaded from the environment at startup. A `.env`
//! file in the working directory is read first when present.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `COGNITO_CLIENT_ID` | User pool app client ID | Required |
//! | `COGNITO_CLIENT_SECRET` | User pool app client secret | Required |
//! | `COGNITO_USER_POOL_ID` | User pool ID (admin operations) | Required |
//! | `COGNITO_REGION` | AWS region hosting the user pool | `ap-southeast-1` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{env, fmt};

use secrecy::SecretString;

/// Environment variable name for the app client ID.
pub const CLIENT_ID_ENV: &str = "COGNITO_CLIENT_ID";

/// Environment variable name for the app client secret.
///
/// The secret keys the `SECRET_HASH` sent with every password sign-in.
pub const CLIENT_SECRET_ENV: &str = "COGNITO_CLIENT_SECRET";

/// Environment variable name for the user pool ID.
pub const USER_POOL_ID_ENV: &str = "COGNITO_USER_POOL_ID";

/// Environment variable name for the user pool region.
pub const REGION_ENV: &str = "COGNITO_REGION";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_REGION: &str = "ap-southeast-1";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Process-wide settings, read once and passed by reference afterwards.
#[derive(Clone)]
pub struct AppConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    pub user_pool_id: String,
    pub region: String,
    pub host: String,
    pub port: u16,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("user_pool_id", &self.user_pool_id)
            .field("region", &self.region)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env_optional(PORT_ENV) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: PORT_ENV,
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            client_id: env_required(CLIENT_ID_ENV)?,
            client_secret: SecretString::from(env_required(CLIENT_SECRET_ENV)?),
            user_pool_id: env_required(USER_POOL_ID_ENV)?,
            region: env_optional(REGION_ENV).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            host: env_optional(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Load a `.env` file if one exists. Returns the path that was loaded.
pub fn load_dotenv() -> Option<std::path::PathBuf> {
    dotenvy::dotenv().ok()
}

fn env_required(name: &'static str) -> Result<String, ConfigError> {
    env_optional(name).ok_or(ConfigError::Missing(name))
}

fn env_optional(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

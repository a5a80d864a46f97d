// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! `SECRET_HASH` computation for app clients configured with a secret.

use base64ct::{Base64, Encoding};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::IdentityError;

type HmacSha256 = Hmac<Sha256>;

/// Base64 of HMAC-SHA-256 over `username ‖ client_id`, keyed by the client
/// secret.
///
/// HMAC takes keys of any length, so the error path is unreachable with
/// `Hmac<Sha256>`. The `Result` matches the fallible shape of the other
/// identity calls and keeps key handling free of panics.
pub fn secret_hash(
    username: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, IdentityError> {
    let mut mac = HmacSha256::new_from_slice(client_secret.as_bytes())
        .map_err(|e| IdentityError::SecretHash(e.to_string()))?;
    mac.update(username.as_bytes());
    mac.update(client_id.as_bytes());

    Ok(Base64::encode_string(&mac.finalize().into_bytes()))
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::identity::IdentityProvider;

/// Shared handler state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(identity: impl IdentityProvider + 'static) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }
}

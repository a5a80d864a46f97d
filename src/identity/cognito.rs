// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Cognito user pool client.

use async_trait::async_trait;
use aws_config::{retry::RetryConfig, BehaviorVersion};
use aws_sdk_cognitoidentityprovider::{
    config::Region,
    error::{DisplayErrorContext, ProvideErrorMetadata},
    operation::initiate_auth::InitiateAuthOutput,
    types::{AttributeType, AuthFlowType},
    Client,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument, warn};

use super::{secret_hash, IdentityError, IdentityProvider};
use crate::{
    config::AppConfig,
    models::{Credentials, NewUser, TokenPair, UserAttribute},
};

const AUTH_PARAM_USERNAME: &str = "USERNAME";
const AUTH_PARAM_PASSWORD: &str = "PASSWORD";
const AUTH_PARAM_SECRET_HASH: &str = "SECRET_HASH";

/// [`IdentityProvider`] backed by a Cognito user pool.
#[derive(Clone)]
pub struct CognitoClient {
    client: Client,
    client_id: String,
    client_secret: SecretString,
    user_pool_id: String,
}

impl CognitoClient {
    /// Build a client for the region in `config`.
    ///
    /// AWS credentials come from the default provider chain and are only
    /// needed by the administrative password call. SDK retries are off so
    /// each request reaches the provider once.
    pub async fn new(config: &AppConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        info!(region = %config.region, "Cognito client configured");

        Self::with_client(Client::new(&sdk_config), config)
    }

    /// Wrap an already configured SDK client.
    pub fn with_client(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            user_pool_id: config.user_pool_id.clone(),
        }
    }
}

#[async_trait]
impl IdentityProvider for CognitoClient {
    #[instrument(skip_all, fields(username = %user.username))]
    async fn sign_up(&self, user: &NewUser) -> Result<(), IdentityError> {
        debug!("sign-up accepted without registration");
        Ok(())
    }

    #[instrument(skip_all, fields(username = %credentials.username))]
    async fn sign_in(&self, credentials: &Credentials) -> Result<TokenPair, IdentityError> {
        let hash = secret_hash(
            &credentials.username,
            &self.client_id,
            self.client_secret.expose_secret(),
        )?;

        let output = self
            .client
            .initiate_auth()
            .auth_flow(AuthFlowType::UserPasswordAuth)
            .client_id(&self.client_id)
            .auth_parameters(AUTH_PARAM_USERNAME, &credentials.username)
            .auth_parameters(AUTH_PARAM_PASSWORD, &credentials.password)
            .auth_parameters(AUTH_PARAM_SECRET_HASH, hash)
            .send()
            .await
            .map_err(|e| provider_error("InitiateAuth", e))?;

        let tokens = token_pair_from(&output)?;
        debug!(expires_in = tokens.expires_in, "sign-in succeeded");
        Ok(tokens)
    }

    #[instrument(skip_all)]
    async fn get_user_by_token(
        &self,
        access_token: &str,
    ) -> Result<Vec<UserAttribute>, IdentityError> {
        let output = self
            .client
            .get_user()
            .access_token(access_token)
            .send()
            .await
            .map_err(|e| provider_error("GetUser", e))?;

        Ok(output
            .user_attributes()
            .iter()
            .map(user_attribute_from)
            .collect())
    }

    #[instrument(skip_all, fields(username = %credentials.username, pool = %self.user_pool_id))]
    async fn update_password(&self, credentials: &Credentials) -> Result<(), IdentityError> {
        self.client
            .admin_set_user_password()
            .user_pool_id(&self.user_pool_id)
            .username(&credentials.username)
            .password(&credentials.password)
            .permanent(true)
            .send()
            .await
            .map_err(|e| provider_error("AdminSetUserPassword", e))?;

        info!("password set");
        Ok(())
    }
}

/// Extract the token set from an `InitiateAuth` response.
fn token_pair_from(output: &InitiateAuthOutput) -> Result<TokenPair, IdentityError> {
    let Some(result) = output.authentication_result() else {
        let challenge = output
            .challenge_name()
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(IdentityError::ChallengeRequired(challenge));
    };

    let access_token = result
        .access_token()
        .ok_or(IdentityError::IncompleteResult("missing access token"))?;
    let id_token = result
        .id_token()
        .ok_or(IdentityError::IncompleteResult("missing id token"))?;

    Ok(TokenPair {
        access_token: access_token.to_string(),
        id_token: id_token.to_string(),
        refresh_token: result.refresh_token().unwrap_or_default().to_string(),
        token_type: result.token_type().unwrap_or_default().to_string(),
        expires_in: result.expires_in(),
    })
}

fn user_attribute_from(attribute: &AttributeType) -> UserAttribute {
    UserAttribute {
        name: attribute.name().to_string(),
        value: attribute.value().map(str::to_string),
    }
}

fn provider_error<E>(operation: &'static str, err: E) -> IdentityError
where
    E: std::error::Error + ProvideErrorMetadata,
{
    warn!(
        operation,
        code = err.code().unwrap_or("unknown"),
        "identity provider call failed"
    );
    IdentityError::Provider {
        operation,
        message: DisplayErrorContext(&err).to_string(),
    }
}

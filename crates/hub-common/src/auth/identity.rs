//! External identity verification
//!
//! The hub never validates Google ID token signatures itself: verification
//! is delegated to Google's tokeninfo endpoint, and the rest of the system
//! only ever sees the stable subject identifier extracted here. The trait
//! keeps the provider swappable so tests can run without network access.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

use crate::error::AppError;

/// A verified external identity, as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Stable subject identifier (`sub`)
    pub subject: String,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Verifies raw ID tokens against an external identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify an ID token and extract the identity it asserts
    ///
    /// # Errors
    /// Returns `InvalidIdentityToken` for tokens the provider rejects and
    /// `ExternalService` when the provider cannot be reached.
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AppError>;
}

/// Response shape of Google's tokeninfo endpoint (fields we use)
#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

/// Google ID token verification via the tokeninfo endpoint
#[derive(Clone)]
pub struct GoogleIdentityProvider {
    client_id: String,
    http: reqwest::Client,
    endpoint: String,
}

impl GoogleIdentityProvider {
    const TOKENINFO_URL: &'static str = "https://oauth2.googleapis.com/tokeninfo";

    /// Create a provider that accepts tokens minted for `client_id`
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            http: reqwest::Client::new(),
            endpoint: Self::TOKENINFO_URL.to_string(),
        }
    }

    /// Override the tokeninfo endpoint (tests point this at a local stub)
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AppError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("tokeninfo request failed: {e}")))?;

        // Google answers 4xx for malformed/expired tokens
        if response.status().is_client_error() {
            return Err(AppError::InvalidIdentityToken);
        }
        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "tokeninfo returned {}",
                response.status()
            )));
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("tokeninfo body malformed: {e}")))?;

        if info.aud != self.client_id {
            warn!(aud = %info.aud, "ID token audience does not match configured client");
            return Err(AppError::InvalidIdentityToken);
        }

        Ok(VerifiedIdentity {
            subject: info.sub,
            email: info.email.unwrap_or_default(),
            name: info.name.unwrap_or_default(),
            avatar_url: info.picture,
        })
    }
}

impl std::fmt::Debug for GoogleIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleIdentityProvider")
            .field("client_id", &self.client_id)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// In-memory identity provider for tests
///
/// Maps opaque tokens to fixed identities; everything else is rejected the
/// way the real provider would reject a bad token.
#[derive(Debug, Default)]
pub struct StaticIdentityProvider {
    identities: HashMap<String, VerifiedIdentity>,
}

impl StaticIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token that verifies to the given identity
    #[must_use]
    pub fn with_identity(mut self, token: impl Into<String>, identity: VerifiedIdentity) -> Self {
        self.identities.insert(token.into(), identity);
        self
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AppError> {
        self.identities
            .get(id_token)
            .cloned()
            .ok_or(AppError::InvalidIdentityToken)
    }
}

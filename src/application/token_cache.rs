// Token cache - single cached bearer token, refreshed on demand
use crate::application::errors::AuthError;
use crate::application::identity_client::IdentityClient;
use crate::domain::token::AccessToken;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct TokenCache {
    identity: Arc<dyn IdentityClient>,
    clock: Arc<dyn Clock>,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenCache {
    pub fn new(identity: Arc<dyn IdentityClient>, clock: Arc<dyn Clock>) -> Self {
        Self {
            identity,
            clock,
            cached: Mutex::new(None),
        }
    }

    /// Return the cached token, or fetch a new one if it is missing or about to expire.
    ///
    /// The lock is held across the refresh, so concurrent callers wait for
    /// the in-flight request and then reuse its token.
    pub async fn token(&self) -> Result<AccessToken, AuthError> {
        let mut cached = self.cached.lock().await;
        let now = self.clock.now();

        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh_at(now)) {
            tracing::debug!("Using cached access token (expires {})", token.expires_on);
            return Ok(token.clone());
        }

        tracing::info!("Requesting new Power BI access token");
        let token = self
            .identity
            .request_token()
            .await
            .inspect_err(|e| tracing::error!("Access token request failed: {}", e))?;

        tracing::info!("Access token refreshed (expires {})", token.expires_on);
        *cached = Some(token.clone());
        Ok(token)
    }

    /// The raw bearer value of [`TokenCache::token`]
    pub async fn bearer(&self) -> Result<String, AuthError> {
        Ok(self.token().await?.value)
    }
}

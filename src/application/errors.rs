// Error types surfaced by the use cases
use thiserror::Error;

/// Failure to obtain a bearer token
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error(
        "Power BI configuration is incomplete. Please set application_id, application_secret and tenant_id"
    )]
    IncompleteConfiguration,
    #[error("Authentication failed: {0}")]
    IdentityProvider(String),
    #[error("Token request failed: {0}")]
    Transport(String),
}

/// Failure of a proxied operation
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to authenticate: {0}")]
    Authentication(#[from] AuthError),
    #[error("{0:#}")]
    Upstream(anyhow::Error),
}

// Identity provider seam used by the token cache
use crate::application::errors::AuthError;
use crate::domain::token::AccessToken;
use async_trait::async_trait;

#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Acquire a fresh app-only token for the Power BI API
    async fn request_token(&self) -> Result<AccessToken, AuthError>;
}

// Azure AD (Entra ID) client-credentials token acquisition
use crate::application::errors::AuthError;
use crate::application::identity_client::IdentityClient;
use crate::domain::token::AccessToken;
use crate::infrastructure::config::PowerBiSettings;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct AzureAdClient {
    http: reqwest::Client,
    settings: PowerBiSettings,
}

#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct TokenEndpointError {
    error: Option<String>,
    error_description: Option<String>,
}

impl AzureAdClient {
    pub fn new(http: reqwest::Client, settings: PowerBiSettings) -> Self {
        Self { http, settings }
    }

    fn describe_failure(status: StatusCode, body: &str) -> String {
        match serde_json::from_str::<TokenEndpointError>(body) {
            Ok(TokenEndpointError {
                error_description: Some(description),
                ..
            }) => description,
            Ok(TokenEndpointError { error: Some(error), .. }) => format!("{} ({})", error, status),
            _ if body.trim().is_empty() => format!("token endpoint returned {}", status),
            _ => format!("token endpoint returned {}: {}", status, body.trim()),
        }
    }
}

#[async_trait]
impl IdentityClient for AzureAdClient {
    async fn request_token(&self) -> Result<AccessToken, AuthError> {
        if !self.settings.is_complete() {
            return Err(AuthError::IncompleteConfiguration);
        }

        let params = [
            ("client_id", self.settings.application_id.as_str()),
            ("client_secret", self.settings.application_secret.as_str()),
            ("grant_type", "client_credentials"),
            ("scope", self.settings.scope.as_str()),
        ];

        let response = self
            .http
            .post(self.settings.token_endpoint())
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::IdentityProvider(Self::describe_failure(status, &body)));
        }

        let token = response
            .json::<TokenEndpointResponse>()
            .await
            .map_err(|e| AuthError::Transport(format!("invalid token response: {}", e)))?;

        Ok(AccessToken::new(
            token.access_token,
            Utc::now() + Duration::seconds(token.expires_in),
        ))
    }
}

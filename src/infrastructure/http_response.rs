// HTTP response envelopes shared by every endpoint
use crate::application::errors::AuthError;
use crate::domain::token::AccessToken;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;

/// `{success, data, error, count}`; always sent with 200 OK.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub count: Option<usize>,
}

impl<T> ApiResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            count: None,
        }
    }

    pub fn failure(error: impl Display) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            count: None,
        }
    }

    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failure(e),
        }
    }
}

impl<T> ApiResult<Vec<T>> {
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            count: Some(count),
            ..Self::ok(items)
        }
    }

    pub fn from_list<E: Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Self::list(items),
            Err(e) => Self::failure(e),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResult<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Body of the token endpoint
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub success: bool,
    pub access_token: Option<String>,
    pub expires_on: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl From<Result<AccessToken, AuthError>> for TokenResponse {
    fn from(result: Result<AccessToken, AuthError>) -> Self {
        match result {
            Ok(token) => Self {
                success: true,
                access_token: Some(token.value),
                expires_on: Some(token.expires_on),
                error: None,
            },
            Err(e) => Self {
                success: false,
                access_token: None,
                expires_on: None,
                error: Some(e.to_string()),
            },
        }
    }
}

impl IntoResponse for TokenResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;

/// Body of every plain confirmation and every error answer.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 201 with a confirmation message.
pub fn created(message: &str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::CREATED, Json(MessageBody::new(message)))
}

/// Unwraps a JSON body, turning a missing, malformed or mistyped body into
/// the route's own 400 instead of axum's plain-text 415/422.
pub fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    message: &str,
) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!(status = %rejection.status(), reason = %rejection.body_text(), "rejected request body");
        ApiError::Validation(message.into())
    })
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    NotFound(String),
    #[error("server error: {0:#}")]
    Server(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(msg) | Self::Conflict(msg) | Self::Auth(msg) | Self::NotFound(msg) => {
                msg
            }
            Self::Server(err) => {
                error!(error = %format!("{err:#}"), "request failed");
                "Server error".to_string()
            }
        };
        (status, Json(MessageBody { message })).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Server(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Server(err.into())
    }
}

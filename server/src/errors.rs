use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use storefront_core::CatalogError;
use tracing::error;

/// Startup failures
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Missing environment variable {1}: {0}")]
    EnvError(std::env::VarError, String),
    #[error("Invalid value for {0}: {1}")]
    InvalidEnv(String, String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot serve: {0}")]
    CannotServe(std::io::Error),
    #[error("Cannot load catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Wrong credentials")]
    WrongCredentials,
    #[error("Not authenticated")]
    NotAuthenticated,
}

/// Failures surfaced to HTTP clients
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error(transparent)]
    Authorization(#[from] AuthError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Something went wrong")]
    Internal(String),
}

pub type RestResult<T> = Result<T, RestError>;

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<tower_sessions::session::Error> for RestError {
    fn from(e: tower_sessions::session::Error) -> Self {
        RestError::Internal(format!("Session store failure: {}", e))
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            RestError::Authorization(_) => StatusCode::UNAUTHORIZED,
            RestError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RestError::Internal(detail) => {
                error!("{}", detail);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

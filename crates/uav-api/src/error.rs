//! # API Error Types
//!
//! Maps pipeline failures onto HTTP responses and GraphQL errors.

use async_graphql::{Error as GraphQLError, ErrorExtensions};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uav_domain::{ConfigureError, ErrorBody, SchemaError, ValidationError};

/// API-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl From<ConfigureError> for ApiError {
    fn from(err: ConfigureError) -> Self {
        match err {
            ConfigureError::Schema(e) => Self::Schema(e),
            ConfigureError::Validation(e) => Self::Validation(e),
        }
    }
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Schema(_) | Self::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Error kind reported in the response body
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => ValidationError::KIND,
            Self::Schema(_) | Self::MalformedBody(_) => SchemaError::KIND,
        }
    }

    /// Get error code for GraphQL extensions
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Schema(_) | Self::MalformedBody(_) => "SCHEMA_ERROR",
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(e) => Some(e.field()),
            Self::Schema(e) => e.field(),
            Self::MalformedBody(_) => None,
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> GraphQLError {
        GraphQLError::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.error_code());
            e.set("status", self.status_code().as_u16());
            if let Some(field) = self.field() {
                e.set("field", field);
            }
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody::new(self.kind(), self.to_string());

        (status, axum::Json(body)).into_response()
    }
}

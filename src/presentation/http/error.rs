// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "infrastructure failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(domain_err) if domain_err.is_caller_input() => {
                Self::new(StatusCode::BAD_REQUEST, domain_err.to_string())
            }
            ApplicationError::Domain(domain_err) => {
                tracing::error!(error = %domain_err, "inconsistent article data");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, domain_err.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn application_errors_map_to_status_codes() {
        let cases = [
            (ApplicationError::validation("bad"), StatusCode::BAD_REQUEST),
            (ApplicationError::not_found("gone"), StatusCode::NOT_FOUND),
            (
                ApplicationError::infrastructure("redis down"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::InvalidComment("text cannot be empty".into()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::DuplicateArticleId("art-1-0".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(HttpError::from_error(err).status(), expected);
        }
    }
}

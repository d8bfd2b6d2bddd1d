use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::DomainError;

/// Status code for an application failure. Endpoint-specific envelopes reuse
/// this mapping while keeping their own body shape.
pub fn status_for(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::Upstream(_) | ApplicationError::Infrastructure(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ApplicationError::Domain(domain_err) => match domain_err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        Self {
            status: status_for(&err),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
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

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
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

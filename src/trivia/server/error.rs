use crate::error::{ErrorKind, TriviaError};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// A failure on its way out of the HTTP boundary.
///
/// Every error response has the same body:
/// `{"success": false, "error": <status>, "message": <text>}`.
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    detail: String,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnprocessableRequest, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, detail)
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.kind)
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::UnprocessableRequest => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn message_for(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::BadRequest => "bad request",
        ErrorKind::NotFound => "resource not found",
        ErrorKind::UnprocessableRequest => "unprocessable",
        ErrorKind::MethodNotAllowed => "method not allowed",
        ErrorKind::InternalError => "server could not respond due to an internal server error",
    }
}

impl From<TriviaError> for ApiError {
    fn from(err: TriviaError) -> Self {
        match &err {
            TriviaError::Io(_) | TriviaError::Serialization(_) | TriviaError::Store(_) => {
                tracing::error!(error = %err, "store operation failed");
            }
            _ => {}
        }
        Self::new(err.kind(), err.to_string())
    }
}

/// Broken JSON is a bad request; valid JSON with missing or mistyped fields is
/// unprocessable.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::unprocessable(e.body_text()),
            other => Self::new(ErrorKind::BadRequest, other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), detail = %self.detail, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), detail = %self.detail, "request rejected");
        }

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: message_for(self.kind),
        };
        (status, Json(body)).into_response()
    }
}

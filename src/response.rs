use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Plain-text acknowledgment for operations without a body.
pub const OK_BODY: &str = "ok";

pub fn log_app_error(err: &AppError, status: StatusCode) {
    match err {
        AppError::Store { source, .. } => {
            tracing::error!(status = status.as_u16(), error = %err, source = ?source, "store error");
        }
        _ => tracing::debug!(status = status.as_u16(), error = %err, "request rejected"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        log_app_error(&self, status);
        (status, self.message()).into_response()
    }
}

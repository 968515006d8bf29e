use axum::http::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

use crate::db::dao::DaoLayerError;

/// Request-time failures. Rendered as plain text by the handler boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body could not be parsed into a valid payload.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// The store rejected or failed a query.
    #[error("{message}")]
    Store {
        message: String,
        #[source]
        source: DbErr,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn store(context: &str, source: DbErr) -> Self {
        Self::Store {
            message: format!("{context}: {source}"),
            source,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            // Store faults stay client errors; callers have always seen 400 here.
            Self::Store { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found("not found"),
            DaoLayerError::Db(source) => AppError::store("database error", source),
        }
    }
}

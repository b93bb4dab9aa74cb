//! Typed errors and HTTP mapping.

use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failures from the SQLite adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },
    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

/// Storage failure seen by the repository, tagged with the operation that failed.
/// Displays as `"<context>: <source message>"`.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl RepositoryError {
    pub fn storage(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| RepositoryError::Storage { context, source }
    }

    /// Re-tag the failure with the operation the caller was performing.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            RepositoryError::Storage { source, .. } => RepositoryError::Storage { context, source },
        }
    }

    /// Short client-facing description of the failed operation.
    pub fn context(&self) -> &'static str {
        match self {
            RepositoryError::Storage { context, .. } => context,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("bad request: {mensaje}")]
    BadRequest {
        mensaje: String,
        detail: Option<String>,
    },
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AppError {
    pub fn bad_request(mensaje: impl Into<String>) -> Self {
        AppError::BadRequest {
            mensaje: mensaje.into(),
            detail: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(mensaje) | AppError::NotFound(mensaje) => Envelope::<()>::failure(mensaje, None),
            AppError::BadRequest { mensaje, detail } => Envelope::failure(mensaje, detail),
            AppError::Repository(err) => {
                tracing::error!(error = %err, "storage failure");
                Envelope::failure(err.context(), Some(err.to_string()))
            }
        };
        (status, Json(body)).into_response()
    }
}

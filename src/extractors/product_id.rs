//! Extract a product id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

pub const INVALID_ID: &str = "ID inválido";

/// Product id parsed as an integer. Non-numeric segments are rejected with 400 before
/// any storage access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest {
                mensaje: INVALID_ID.into(),
                detail: Some(rejection.body_text()),
            })?;
        raw.trim()
            .parse::<i64>()
            .map(ProductId)
            .map_err(|_| AppError::bad_request(INVALID_ID))
    }
}

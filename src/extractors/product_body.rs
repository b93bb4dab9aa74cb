//! Extract a product payload from a JSON or urlencoded form body.

use crate::error::AppError;
use crate::model::ProductPayload;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};

pub const INVALID_BODY: &str = "Cuerpo de la petición inválido";

/// Product fields from the request body. JSON and `application/x-www-form-urlencoded` bodies
/// are parsed; any other or missing content type yields an empty payload.
#[derive(Clone, Debug, Default)]
pub struct ProductBody(pub ProductPayload);

fn invalid(detail: String) -> AppError {
    AppError::BadRequest {
        mensaje: INVALID_BODY.into(),
        detail: Some(detail),
    }
}

#[async_trait]
impl<S> FromRequest<S> for ProductBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if content_type.starts_with("application/json") || content_type.contains("+json") {
            let Json(payload) = Json::<ProductPayload>::from_request(req, state)
                .await
                .map_err(|rejection| invalid(rejection.body_text()))?;
            return Ok(ProductBody(payload));
        }
        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload) = Form::<ProductPayload>::from_request(req, state)
                .await
                .map_err(|rejection| invalid(rejection.body_text()))?;
            return Ok(ProductBody(payload));
        }
        Ok(ProductBody::default())
    }
}

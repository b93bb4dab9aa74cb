//! Product CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{ProductBody, ProductId};
use crate::response::{success_created, success_many, success_message, success_one};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub const NOT_FOUND: &str = "Producto no encontrado";

const UPDATE_FAILED: &str = "Error al actualizar producto";
const DELETE_FAILED: &str = "Error al eliminar producto";

/// Fails with 404 unless a row with `id` exists. Storage failures are reported under `context`.
async fn ensure_exists(state: &AppState, id: i64, context: &'static str) -> Result<(), AppError> {
    state
        .products
        .get_by_id(id)
        .await
        .map_err(|e| e.with_context(context))?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.products.list_all().await?;
    Ok(success_many("Productos obtenidos correctamente", rows))
}

pub async fn read(State(state): State<AppState>, ProductId(id): ProductId) -> Result<impl IntoResponse, AppError> {
    let row = state
        .products
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(success_one("Producto encontrado", row))
}

pub async fn create(
    State(state): State<AppState>,
    ProductBody(body): ProductBody,
) -> Result<impl IntoResponse, AppError> {
    let fields = RequestValidator::validate_create(body)?;
    let row = state.products.create(fields).await?;
    tracing::info!(id = row.id, "product created");
    Ok(success_created("Producto creado exitosamente", row))
}

/// Existence is checked before the body is looked at. A row that vanishes between the
/// check and the write is reported as 404.
pub async fn update(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    body: Result<ProductBody, AppError>,
) -> Result<impl IntoResponse, AppError> {
    ensure_exists(&state, id, UPDATE_FAILED).await?;
    let ProductBody(fields) = body?;
    if !state.products.update(id, fields.into()).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    Ok(success_message("Producto actualizado exitosamente"))
}

pub async fn delete(State(state): State<AppState>, ProductId(id): ProductId) -> Result<impl IntoResponse, AppError> {
    ensure_exists(&state, id, DELETE_FAILED).await?;
    if !state.products.delete(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    Ok(success_message("Producto eliminado exitosamente"))
}

//! Common routes: welcome, health, readiness, and the catch-all 404.

use crate::response::Envelope;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

pub const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "mensaje": "¡Bienvenido a la API REST de Productos!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "productos": super::PRODUCTOS_PREFIX,
            "documentacion": "Usa Postman en VSCode para probar"
        }
    }))
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(err) = state.store().ping().await {
        tracing::warn!(error = %err, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: Some("ok"),
    }))
}

pub async fn not_found() -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::NOT_FOUND, Json(Envelope::failure(ROUTE_NOT_FOUND, None)))
}

/// GET /, GET /health, GET /ready.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}

//! Route table and HTTP middleware.

mod common;
mod products;

pub use common::{common_routes, not_found, ROUTE_NOT_FOUND};
pub use products::product_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

pub const PRODUCTOS_PREFIX: &str = "/api/productos";

/// Request bodies above this size are refused with 413.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Full application: welcome/health/ready, product CRUD under `/api/productos`,
/// a JSON 404 for anything else, and tracing, body-limit and CORS middleware.
/// The body limit sits outside CORS: `Cors` needs a `Default` inner response body.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(PRODUCTOS_PREFIX, product_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
                .layer(CorsLayer::permissive()),
        )
}

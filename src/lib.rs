//! Productos API: CRUD REST service for products stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, RepositoryError, StoreError};
pub use model::{NewProduct, Product, ProductPayload, ProductUpdate};
pub use response::Envelope;
pub use routes::app;
pub use service::ProductRepository;
pub use state::AppState;
pub use store::{ExecOutcome, Store};

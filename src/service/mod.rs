//! ProductRepository and request validation.

mod products;
mod validation;
pub use products::{ProductRepository, PRODUCTOS};
pub use validation::{RequestValidator, MISSING_REQUIRED};

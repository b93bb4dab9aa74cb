//! Request extractors.

mod product_body;
mod product_id;
pub use product_body::{ProductBody, INVALID_BODY};
pub use product_id::{ProductId, INVALID_ID};

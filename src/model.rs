//! Product records and request payloads.

use serde::{Deserialize, Serialize};

/// One row of `productos`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i64,
}

/// JSON body accepted by POST and PUT. Which fields are required is decided by the handler.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<f64>,
    pub stock: Option<i64>,
}

/// Validated fields for an insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i64,
}

impl NewProduct {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            nombre: self.nombre,
            descripcion: self.descripcion,
            precio: self.precio,
            stock: self.stock,
        }
    }
}

/// Full replacement of a row's writable columns. Absent fields are written as NULL,
/// except `stock` which falls back to 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductUpdate {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<f64>,
    pub stock: i64,
}

impl From<ProductPayload> for ProductUpdate {
    fn from(p: ProductPayload) -> Self {
        ProductUpdate {
            nombre: p.nombre,
            descripcion: p.descripcion,
            precio: p.precio,
            stock: p.stock.unwrap_or(0),
        }
    }
}

impl From<NewProduct> for ProductUpdate {
    fn from(p: NewProduct) -> Self {
        ProductUpdate {
            nombre: Some(p.nombre),
            descripcion: p.descripcion,
            precio: Some(p.precio),
            stock: p.stock,
        }
    }
}

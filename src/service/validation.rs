//! Presence checks for product payloads.

use crate::error::AppError;
use crate::model::{NewProduct, ProductPayload};

pub const MISSING_REQUIRED: &str = "Nombre y precio son obligatorios";

pub struct RequestValidator;

impl RequestValidator {
    /// `nombre` must be a non-empty string and `precio` a non-zero number. A missing or zero
    /// `stock` becomes 0.
    pub fn validate_create(body: ProductPayload) -> Result<NewProduct, AppError> {
        let nombre = body.nombre.filter(|n| !n.is_empty());
        let precio = body.precio.filter(|p| *p != 0.0);
        match (nombre, precio) {
            (Some(nombre), Some(precio)) => Ok(NewProduct {
                nombre,
                descripcion: body.descripcion,
                precio,
                stock: body.stock.unwrap_or(0),
            }),
            _ => Err(AppError::Validation(MISSING_REQUIRED.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(nombre: Option<&str>, precio: Option<f64>) -> ProductPayload {
        ProductPayload {
            nombre: nombre.map(String::from),
            precio,
            ..Default::default()
        }
    }

    #[test]
    fn accepts_name_and_price_and_defaults_stock() {
        let p = RequestValidator::validate_create(payload(Some("Mouse"), Some(25.5))).unwrap();
        assert_eq!(p.nombre, "Mouse");
        assert_eq!(p.precio, 25.5);
        assert_eq!(p.stock, 0);
        assert_eq!(p.descripcion, None);
    }

    #[test]
    fn keeps_explicit_stock() {
        let mut body = payload(Some("Mouse"), Some(1.0));
        body.stock = Some(4);
        assert_eq!(RequestValidator::validate_create(body).unwrap().stock, 4);
    }

    #[test]
    fn rejects_missing_or_empty_name() {
        for body in [payload(None, Some(1.0)), payload(Some(""), Some(1.0))] {
            let err = RequestValidator::validate_create(body).unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m == MISSING_REQUIRED));
        }
    }

    #[test]
    fn rejects_missing_or_zero_price() {
        assert!(RequestValidator::validate_create(payload(Some("Mouse"), None)).is_err());
        assert!(RequestValidator::validate_create(payload(Some("Mouse"), Some(0.0))).is_err());
    }
}

//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Uniform wrapper for every API response: `{success, mensaje, data?, error?}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub mensaje: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(mensaje: impl Into<String>, data: Option<T>) -> Self {
        Envelope {
            success: true,
            mensaje: mensaje.into(),
            data,
            error: None,
        }
    }

    pub fn failure(mensaje: impl Into<String>, error: Option<String>) -> Self {
        Envelope {
            success: false,
            mensaje: mensaje.into(),
            data: None,
            error,
        }
    }
}

pub fn success_one<T: Serialize>(mensaje: &str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope::success(mensaje, Some(data))))
}

pub fn success_created<T: Serialize>(mensaje: &str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, Json(Envelope::success(mensaje, Some(data))))
}

pub fn success_many<T: Serialize>(mensaje: &str, data: Vec<T>) -> (StatusCode, Json<Envelope<Vec<T>>>) {
    (StatusCode::OK, Json(Envelope::success(mensaje, Some(data))))
}

/// 200 with no `data` field.
pub fn success_message(mensaje: &str) -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::OK, Json(Envelope::success(mensaje, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_without_data_omits_optional_fields() {
        let body = serde_json::to_value(Envelope::<()>::success("ok", None)).unwrap();
        assert_eq!(body, json!({"success": true, "mensaje": "ok"}));
    }

    #[test]
    fn failure_carries_error_text() {
        let body = serde_json::to_value(Envelope::<()>::failure("Error al crear producto", Some("disk I/O error".into()))).unwrap();
        assert_eq!(
            body,
            json!({"success": false, "mensaje": "Error al crear producto", "error": "disk I/O error"})
        );
    }

    #[test]
    fn empty_list_still_has_data_array() {
        let (status, Json(env)) = success_many::<u32>("listado", Vec::new());
        assert_eq!(status, StatusCode::OK);
        let body = serde_json::to_value(env).unwrap();
        assert_eq!(body["data"], json!([]));
    }
}

// ============================================================================
// ERROR - Errores del crate
// ============================================================================
// Todos los errores son síncronos y descriptivos. La validación ocurre antes
// de cualquier mutación: una llamada rechazada no deja efectos parciales y
// nunca invalida el elemento envuelto por el builder.
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Resultado estándar del crate
pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    /// Argumento inválido del caller (tipo o forma incorrecta)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Fallo reportado por la API DOM subyacente
    #[error("dom operation failed: {0}")]
    Js(String),

    /// No hay window/document disponible en el entorno
    #[error("no document available")]
    NoDocument,
}

impl DomError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        DomError::InvalidArgument(msg.into())
    }
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        // Las excepciones DOM llegan como JsValue; las aplanamos a texto
        let msg = value
            .as_string()
            .or_else(|| js_sys::Reflect::get(&value, &JsValue::from_str("message")).ok()?.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js(msg)
    }
}

impl From<DomError> for JsValue {
    fn from(value: DomError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = DomError::invalid("the value argument must be a string or a list of strings");
        assert_eq!(
            err.to_string(),
            "invalid argument: the value argument must be a string or a list of strings"
        );
    }

    #[test]
    fn no_document_display() {
        assert_eq!(DomError::NoDocument.to_string(), "no document available");
    }
}

//! Errores de los steps adaptadores.

use msg_core::StepError;
use thiserror::Error;

/// Fallo de decodificación del payload. Se subdivide para logs más ricos;
/// el runner lo observa como un único `StepError::Decode`.
#[derive(Debug, Error)]
pub enum DecodeFailure {
    /// Caracteres fuera del alfabeto base64, padding no canónico o entrada
    /// truncada.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    /// Los bytes decodificados no forman texto UTF-8 válido.
    #[error("decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl From<DecodeFailure> for StepError {
    fn from(e: DecodeFailure) -> Self {
        StepError::Decode(e.to_string())
    }
}

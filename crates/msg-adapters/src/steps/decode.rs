//! Base64DecodeStep (Transform determinista)
//!
//! - Interpreta el payload como base64 estándar estricto y lo reemplaza por
//!   su texto UTF-8 decodificado.
//! - Sin IO externo ni estado entre invocaciones; seguro de invocar en
//!   paralelo sobre mensajes distintos.
//! - La política de fallo (log único + payload intacto) vive en el runner,
//!   no aquí: el step sólo reporta.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use msg_core::{PreprocessorStep, StepRunResult};

use crate::error::DecodeFailure;

/// Decodifica `payload` (base64 estándar) a texto UTF-8 estricto.
///
/// Falla, sin truncar ni sustituir, ante caracteres fuera del alfabeto,
/// padding no canónico o entrada truncada; también ante bytes que no forman
/// UTF-8 válido (nada de caracteres de reemplazo).
fn decode_base64_utf8(payload: &str) -> Result<String, DecodeFailure> {
    let raw = STANDARD.decode(payload)?;
    let text = String::from_utf8(raw)?;
    Ok(text)
}

/// Step de preprocesamiento: payload base64 -> texto UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64DecodeStep;

impl Base64DecodeStep {
    pub fn new() -> Self {
        Self
    }
}

impl PreprocessorStep for Base64DecodeStep {
    fn id(&self) -> &str {
        "base64_decode"
    }

    fn apply(&self, payload: &str) -> StepRunResult {
        match decode_base64_utf8(payload) {
            Ok(text) => StepRunResult::Success { payload: text },
            Err(e) => StepRunResult::Failure { error: e.into() },
        }
    }
}

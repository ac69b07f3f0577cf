//! Errores del lado del core (un solo tipo por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallo reportado por un step. El core maneja una única clase de fallo:
/// el payload no pudo decodificarse. Los adaptadores pueden subdividirla
/// internamente, pero hacia el runner llega como un solo kind.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum StepError {
    #[error("payload decode error: {0}")] Decode(String),
}

//! Carrier del mensaje en vuelo.
//!
//! El pipeline es dueño del payload; el step sólo lo observa durante su
//! propia invocación. `MessageCarrier` modela el par get/set que el runtime
//! anfitrión expone al punto de preprocesamiento.

use serde_json::Value;

/// Acceso al payload textual del mensaje actual.
pub trait MessageCarrier {
    /// Payload textual en el punto en que corre el step.
    fn payload(&self) -> &str;

    /// Reemplaza el payload para los steps siguientes.
    fn set_payload(&mut self, payload: String);
}

/// Carrier mínimo en memoria (tests y demo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryMessage {
    payload: String,
}

impl InMemoryMessage {
    pub fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into() }
    }

    /// Construye el carrier desde un payload estructurado, materializando su
    /// representación textual antes de que corra ningún step. Un
    /// `Value::String` pasa tal cual; cualquier otro valor JSON se
    /// materializa con su texto canónico.
    pub fn from_value(value: Value) -> Self {
        let payload = match value {
            Value::String(s) => s,
            other => other.to_string(),
        };
        Self { payload }
    }
}

impl MessageCarrier for InMemoryMessage {
    fn payload(&self) -> &str {
        &self.payload
    }

    fn set_payload(&mut self, payload: String) {
        self.payload = payload;
    }
}

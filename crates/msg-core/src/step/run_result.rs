use crate::errors::StepError;

/// Resultado abstracto de aplicar un step al payload en vuelo.
pub enum StepRunResult {
    /// Texto de reemplazo completo para el payload.
    Success { payload: String },
    Failure { error: StepError },
}

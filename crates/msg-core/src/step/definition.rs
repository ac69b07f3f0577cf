use super::run_result::StepRunResult;

/// Trait que define un preprocessor step. Implementaciones deben ser puras
/// respecto al payload: sin estado entre invocaciones, sin IO propio.
pub trait PreprocessorStep {
    /// Identificador estable y único dentro del pipeline.
    fn id(&self) -> &str;

    /// Nombre opcional amigable.
    fn name(&self) -> &str { self.id() }

    /// Transformación síncrona del payload textual. Debe producir el texto
    /// de reemplazo completo o un fallo; nunca salida parcial.
    fn apply(&self, payload: &str) -> StepRunResult;
}

//! Definiciones relacionadas a steps de preprocesamiento.
//!
//! Un step es una unidad síncrona que transforma el payload textual del
//! mensaje en vuelo. Este módulo define:
//! - `PreprocessorStep`: interfaz neutral usada por el runner.
//! - `StepRunResult`: texto de reemplazo completo o fallo con `StepError`.
//! - `StepStatus`: máquina de estados por invocación.

pub mod definition;
mod run_result;
mod status;

pub use definition::PreprocessorStep;
pub use run_result::StepRunResult;
pub use status::StepStatus;

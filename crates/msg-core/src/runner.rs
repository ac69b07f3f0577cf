//! Runner de un step de preprocesamiento.
//!
//! Política de recuperación: el fallo de un step es terminal para la
//! invocación pero nunca para el pipeline. El runner captura el fallo, emite
//! exactamente un registro de error y deja pasar el payload sin modificar
//! hacia los steps siguientes.

use crate::logging::{LogLevel, StepLogger};
use crate::message::MessageCarrier;
use crate::step::{PreprocessorStep, StepRunResult, StepStatus};

/// Aplica `step` al mensaje actual del carrier.
///
/// Garantía de resultado: o bien el payload queda reemplazado por completo y
/// no se emite ningún registro, o bien queda bit a bit idéntico y se emite
/// un único registro de error. No existe un tercer resultado, y el fallo del
/// step nunca escapa de esta función.
pub fn run_step<S, C, L>(step: &S, carrier: &mut C, logger: &L) -> StepStatus
    where S: PreprocessorStep + ?Sized,
          C: MessageCarrier + ?Sized,
          L: StepLogger + ?Sized
{
    match step.apply(carrier.payload()) {
        StepRunResult::Success { payload } => {
            carrier.set_payload(payload);
            StepStatus::Succeeded
        }
        StepRunResult::Failure { error } => {
            logger.log(LogLevel::Error, &format!("step '{}': {error}", step.name()));
            StepStatus::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StepError;
    use crate::logging::MemoryLogger;
    use crate::message::InMemoryMessage;

    #[derive(Debug)]
    struct UppercaseStep;
    impl PreprocessorStep for UppercaseStep {
        fn id(&self) -> &str { "uppercase" }
        fn apply(&self, payload: &str) -> StepRunResult {
            StepRunResult::Success { payload: payload.to_uppercase() }
        }
    }

    #[derive(Debug)]
    struct AlwaysFailStep;
    impl PreprocessorStep for AlwaysFailStep {
        fn id(&self) -> &str { "always_fail" }
        fn apply(&self, _payload: &str) -> StepRunResult {
            StepRunResult::Failure { error: StepError::Decode("boom".into()) }
        }
    }

    #[test]
    fn success_replaces_payload_and_logs_nothing() {
        let mut msg = InMemoryMessage::new("hola");
        let logger = MemoryLogger::new();

        let status = run_step(&UppercaseStep, &mut msg, &logger);

        assert_eq!(status, StepStatus::Succeeded);
        assert!(status.is_terminal());
        assert_eq!(msg.payload(), "HOLA");
        assert!(logger.records().is_empty());
    }

    #[test]
    fn failure_leaves_payload_untouched_and_logs_once() {
        let mut msg = InMemoryMessage::new("hola");
        let logger = MemoryLogger::new();

        let status = run_step(&AlwaysFailStep, &mut msg, &logger);

        assert_eq!(status, StepStatus::Failed);
        assert_eq!(msg.payload(), "hola");
        assert_eq!(logger.error_count(), 1);
        // El registro identifica al step y describe el fallo.
        let (_, text) = &logger.records()[0];
        assert!(text.contains("always_fail"), "record should name the step: {text}");
        assert!(text.contains("boom"), "record should describe the failure: {text}");
    }

    #[test]
    fn repeated_failures_accumulate_no_state() {
        let mut msg = InMemoryMessage::new("hola");
        let logger = MemoryLogger::new();

        for _ in 0..3 {
            let status = run_step(&AlwaysFailStep, &mut msg, &logger);
            assert_eq!(status, StepStatus::Failed);
            assert_eq!(msg.payload(), "hola");
        }
        // Un registro por invocación, ni más ni menos.
        assert_eq!(logger.error_count(), 3);
    }

    #[test]
    fn runner_accepts_trait_objects() {
        let step: Box<dyn PreprocessorStep> = Box::new(UppercaseStep);
        let mut msg = InMemoryMessage::new("dyn");
        let logger = MemoryLogger::new();

        let status = run_step(step.as_ref(), &mut msg, &logger);

        assert_eq!(status, StepStatus::Succeeded);
        assert_eq!(msg.payload(), "DYN");
    }
}

//! msg-core: contratos neutrales del punto de preprocesamiento de mensajes
pub mod errors;
pub mod logging;
pub mod message;
pub mod runner;
pub mod step;

pub use errors::StepError;
pub use logging::{LogLevel, MemoryLogger, StepLogger, TracingLogger};
pub use message::{InMemoryMessage, MessageCarrier};
pub use runner::run_step;
pub use step::{PreprocessorStep, StepRunResult, StepStatus};

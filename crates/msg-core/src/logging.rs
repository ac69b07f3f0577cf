//! Sink de logging inyectado al runner.
//!
//! El runtime anfitrión expone un logger ambiental; aquí se modela como una
//! capacidad explícita para mantener los steps puros. El sink es
//! fire-and-forget: el runner no consume ningún valor de retorno.

use std::sync::Mutex;

/// Severidad de un registro emitido hacia el sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// Sink de observabilidad externo al core.
pub trait StepLogger {
    fn log(&self, level: LogLevel, message: &str);
}

/// Logger de producción sobre `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl StepLogger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => tracing::info!(target: "msgflow", "{message}"),
            LogLevel::Error => tracing::error!(target: "msgflow", "{message}"),
        }
    }
}

/// Logger en memoria para asserts en tests. Preserva el orden de emisión.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.lock().expect("memory logger lock").clone()
    }

    pub fn error_count(&self) -> usize {
        self.records().iter().filter(|(l, _)| *l == LogLevel::Error).count()
    }
}

impl StepLogger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.records
            .lock()
            .expect("memory logger lock")
            .push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_logger_preserves_order_and_counts_errors() {
        let logger = MemoryLogger::new();
        logger.log(LogLevel::Info, "first");
        logger.log(LogLevel::Error, "second");

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], (LogLevel::Info, "first".to_string()));
        assert_eq!(records[1], (LogLevel::Error, "second".to_string()));
        assert_eq!(logger.error_count(), 1);
    }
}

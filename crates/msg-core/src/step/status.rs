/// Estado de una invocación de step.
///
/// Las transiciones válidas son:
/// - `Attempting` -> `Succeeded`
/// - `Attempting` -> `Failed`
///
/// No hay reintentos ni reentradas: cada invocación recorre la máquina
/// exactamente una vez y no persiste estado entre invocaciones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// El step está en ejecución.
    Attempting,
    /// El step reemplazó el payload.
    Succeeded,
    /// El step falló; el payload quedó sin modificar.
    Failed,
}

impl StepStatus {
    /// `true` si la invocación llegó a un estado terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepStatus::Succeeded | StepStatus::Failed)
    }
}

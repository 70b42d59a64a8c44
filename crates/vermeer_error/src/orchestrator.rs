//! Orchestrator command rejections.

/// Reasons the orchestrator refuses a command outright.
///
/// Provider failures are never reported through this type; they are recorded
/// as scoped failures in the generation state instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OrchestratorErrorKind {
    /// Another operation is in flight
    #[display("Orchestrator is busy: {}", _0)]
    Busy(String),
}

/// Orchestrator error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Orchestrator Error: {} at line {} in {}", kind, line, file)]
pub struct OrchestratorError {
    /// The kind of error that occurred
    pub kind: OrchestratorErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl OrchestratorError {
    /// Create a new OrchestratorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OrchestratorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &OrchestratorErrorKind {
        &self.kind
    }
}

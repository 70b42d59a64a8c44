//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, OrchestratorError, ProviderError};

/// Every error condition a Vermeer crate can report.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerError, ConfigError};
///
/// let err: VermeerError = ConfigError::new("bad tone").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VermeerErrorKind {
    /// Generative provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Orchestrator rejected a command
    #[from(OrchestratorError)]
    Orchestrator(OrchestratorError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Vermeer error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vermeer Error: {}", _0)]
pub struct VermeerError(Box<VermeerErrorKind>);

impl VermeerError {
    /// Create a new error from a kind.
    pub fn new(kind: VermeerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VermeerErrorKind {
        &self.0
    }

    /// The provider error inside this error, if that is what it wraps.
    pub fn as_provider(&self) -> Option<&ProviderError> {
        match self.kind() {
            VermeerErrorKind::Provider(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to VermeerErrorKind
impl<T> From<T> for VermeerError
where
    T: Into<VermeerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vermeer operations.
pub type VermeerResult<T> = std::result::Result<T, VermeerError>;

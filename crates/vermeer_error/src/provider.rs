//! Generative provider error types.

/// Message surfaced in place of a raw permission/quota failure.
pub const PERMISSION_DENIED_MESSAGE: &str =
    "Permission denied. The free model may be overloaded or your key is invalid.";

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// No credential could be loaded for the provider
    #[display("Missing provider credential: {}", _0)]
    MissingCredential(String),
    /// Network or client failure before a response arrived
    #[display("Provider request failed: {}", _0)]
    Transport(String),
    /// Provider answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Provider refused the call for permission or quota reasons
    #[display("{}", _0)]
    PermissionDenied(String),
    /// Text call succeeded but carried no payload
    #[display("No response from provider")]
    NoResponse,
    /// Image call succeeded but carried no inline image part
    #[display("No image data found in response")]
    NoImageData,
    /// Payload present but not in the requested shape
    #[display("Malformed provider response: {}", _0)]
    MalformedResponse(String),
}

impl ProviderErrorKind {
    /// Whether this failure carries a permission/quota signal.
    ///
    /// Matches an explicit 403 status, a `403` in the message, or the
    /// `PERMISSION_DENIED` status string.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            ProviderErrorKind::PermissionDenied(_) => true,
            ProviderErrorKind::Http {
                status_code,
                message,
            } => *status_code == 403 || Self::message_signals_permission(message),
            ProviderErrorKind::Transport(message) => Self::message_signals_permission(message),
            _ => false,
        }
    }

    /// Whether the provider answered but omitted the required payload shape.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            ProviderErrorKind::NoResponse
                | ProviderErrorKind::NoImageData
                | ProviderErrorKind::MalformedResponse(_)
        )
    }

    fn message_signals_permission(message: &str) -> bool {
        message.contains("403") || message.contains("PERMISSION_DENIED")
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use vermeer_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Http {
///     status_code: 403,
///     message: "The caller does not have permission".to_string(),
/// });
/// assert!(err.kind.is_permission_denied());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }

    /// Rewrite permission-class failures into [`ProviderErrorKind::PermissionDenied`].
    ///
    /// Other failures pass through verbatim. The original location is kept.
    pub fn surfaced(self) -> Self {
        if self.kind.is_permission_denied()
            && !matches!(self.kind, ProviderErrorKind::PermissionDenied(_))
        {
            Self {
                kind: ProviderErrorKind::PermissionDenied(PERMISSION_DENIED_MESSAGE.to_string()),
                ..self
            }
        } else {
            self
        }
    }
}

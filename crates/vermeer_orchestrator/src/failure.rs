//! Scoped failure values recorded in the generation state.

use crate::Scope;
use serde::{Deserialize, Serialize};
use vermeer_error::{ProviderErrorKind, VermeerError};

/// Failure classes a presentation layer can distinguish.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum FailureKind {
    /// Permission or quota refusal from the provider
    PermissionDenied,
    /// Network, credential, or provider-side failure
    Transport,
    /// Provider answered without the required payload
    ContractViolation,
}

/// A failure bound to the scope that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{} failed: {}", scope, message)]
pub struct GenerationFailure {
    /// Operation scope
    pub scope: Scope,
    /// Failure class
    pub kind: FailureKind,
    /// Human-readable message
    pub message: String,
}

impl GenerationFailure {
    /// Classify an error raised while serving `scope`.
    ///
    /// Permission-class provider failures are rewritten to the fixed
    /// permission message; everything else keeps its own message.
    pub fn from_error(scope: Scope, err: &VermeerError) -> Self {
        let Some(provider) = err.as_provider() else {
            return Self {
                scope,
                kind: FailureKind::Transport,
                message: err.to_string(),
            };
        };

        let surfaced = provider.clone().surfaced();
        let kind = match surfaced.kind() {
            ProviderErrorKind::PermissionDenied(_) => FailureKind::PermissionDenied,
            other if other.is_contract_violation() => FailureKind::ContractViolation,
            _ => FailureKind::Transport,
        };
        Self {
            scope,
            kind,
            message: surfaced.kind().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vermeer_core::Platform;
    use vermeer_error::{ConfigError, PERMISSION_DENIED_MESSAGE, ProviderError};

    fn provider_error(kind: ProviderErrorKind) -> VermeerError {
        ProviderError::new(kind).into()
    }

    #[test]
    fn permission_failures_get_the_fixed_message() {
        let err = provider_error(ProviderErrorKind::Http {
            status_code: 403,
            message: "API key not valid".to_string(),
        });
        let failure = GenerationFailure::from_error(Scope::Run, &err);
        assert_eq!(failure.kind, FailureKind::PermissionDenied);
        assert_eq!(failure.message, PERMISSION_DENIED_MESSAGE);
    }

    #[test]
    fn transport_failures_keep_their_message() {
        let err = provider_error(ProviderErrorKind::Http {
            status_code: 500,
            message: "internal".to_string(),
        });
        let failure = GenerationFailure::from_error(Scope::Image(Platform::Twitter), &err);
        assert_eq!(failure.kind, FailureKind::Transport);
        assert_eq!(failure.message, "HTTP 500 error: internal");
    }

    #[test]
    fn missing_payloads_are_contract_violations() {
        let err = provider_error(ProviderErrorKind::NoImageData);
        let failure = GenerationFailure::from_error(Scope::Image(Platform::Linkedin), &err);
        assert_eq!(failure.kind, FailureKind::ContractViolation);
        assert_eq!(failure.message, "No image data found in response");
        assert_eq!(failure.to_string(), "image:linkedin failed: No image data found in response");
    }

    #[test]
    fn non_provider_errors_are_transport() {
        let err: VermeerError = ConfigError::new("bad").into();
        let failure = GenerationFailure::from_error(Scope::Run, &err);
        assert_eq!(failure.kind, FailureKind::Transport);
    }
}

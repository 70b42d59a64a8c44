//! Credential sources for provider clients.

use vermeer_error::{ProviderError, ProviderErrorKind, VermeerResult};
use vermeer_interface::CredentialSource;

/// Environment variable holding the Gemini API key by default.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Reads the API key from an environment variable on every call.
///
/// A key set (or rotated) after startup is picked up by the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    /// Read the key from `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the environment variable consulted.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredentials {
    fn credential(&self) -> VermeerResult<String> {
        match std::env::var(&self.var) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(ProviderError::new(ProviderErrorKind::MissingCredential(format!(
                "{} is not set",
                self.var
            )))
            .into()),
        }
    }
}

/// A fixed API key.
#[derive(Clone)]
pub struct StaticCredentials(String);

impl StaticCredentials {
    /// Wrap a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StaticCredentials").field(&"<redacted>").finish()
    }
}

impl CredentialSource for StaticCredentials {
    fn credential(&self) -> VermeerResult<String> {
        if self.0.trim().is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::MissingCredential(
                "empty API key".to_string(),
            ))
            .into());
        }
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_is_a_missing_credential() {
        let creds = EnvCredentials::new("VERMEER_TEST_UNSET_KEY_6d1f0c");
        let err = creds.credential().unwrap_err();
        match &err.as_provider().unwrap().kind {
            ProviderErrorKind::MissingCredential(message) => {
                assert!(message.contains("VERMEER_TEST_UNSET_KEY_6d1f0c"))
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn static_key_is_redacted_in_debug() {
        let creds = StaticCredentials::new("secret-key");
        assert_eq!(creds.credential().unwrap(), "secret-key");
        assert!(!format!("{:?}", creds).contains("secret"));
    }

    #[test]
    fn blank_static_key_is_missing() {
        assert!(StaticCredentials::new("  ").credential().is_err());
    }
}

//! Layered TOML configuration.
//!
//! Precedence (later sources override earlier):
//! - Bundled defaults (include_str! from vermeer.toml)
//! - User config in home directory (~/.config/vermeer/vermeer.toml)
//! - User config in current directory (./vermeer.toml)

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use vermeer_core::{AspectRatio, ImageSize, Settings, Tone};
use vermeer_error::{ConfigError, VermeerError, VermeerResult};
use vermeer_models::{
    DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
    EnvCredentials, GeminiClient,
};
use vermeer_orchestrator::Orchestrator;
use vermeer_prompt::{DEFAULT_SYSTEM_INSTRUCTION, PromptComposer};

const DEFAULT_CONFIG: &str = include_str!("../vermeer.toml");

/// Provider endpoint and model selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API root
    pub base_url: String,
    /// Model for the batch text call
    pub text_model: String,
    /// Model for image calls
    pub image_model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// System instruction for text calls
    pub system_instruction: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

/// Initial generation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Voice preset
    pub tone: Tone,
    /// Fidelity tier
    pub image_size: ImageSize,
    /// Aspect ratio, possibly `Auto`
    pub aspect_ratio: AspectRatio,
}

impl From<DefaultsConfig> for Settings {
    fn from(defaults: DefaultsConfig) -> Self {
        Settings {
            tone: defaults.tone,
            image_size: defaults.image_size,
            aspect_ratio: defaults.aspect_ratio,
        }
    }
}

/// Top-level Vermeer configuration.
///
/// # Example
///
/// ```no_run
/// use vermeer::VermeerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VermeerConfig::load()?;
/// println!("Text model: {}", config.provider.text_model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VermeerConfig {
    /// Provider section
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Defaults section
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

fn config_error(context: &str, err: config::ConfigError) -> VermeerError {
    ConfigError::new(format!("{}: {}", context, err)).into()
}

impl VermeerConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> VermeerResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                config_error(
                    &format!("Failed to read configuration from {}", path.as_ref().display()),
                    e,
                )
            })?
            .try_deserialize()
            .map_err(|e| config_error("Failed to parse configuration", e))
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> VermeerResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vermeer/vermeer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("vermeer").required(false));

        builder
            .build()
            .map_err(|e| config_error("Failed to build configuration", e))?
            .try_deserialize()
            .map_err(|e| config_error("Failed to parse configuration", e))
    }

    /// Initial settings from the `[defaults]` section.
    pub fn settings(&self) -> Settings {
        self.defaults.into()
    }

    /// Credential source reading the configured environment variable.
    pub fn credentials(&self) -> EnvCredentials {
        EnvCredentials::new(&self.provider.api_key_env)
    }

    /// Gemini client for the configured endpoint and models.
    pub fn gemini_client(&self) -> GeminiClient {
        GeminiClient::new(Arc::new(self.credentials()))
            .with_base_url(&self.provider.base_url)
            .with_text_model(&self.provider.text_model)
            .with_image_model(&self.provider.image_model)
    }

    /// Prompt composer carrying the configured system instruction.
    pub fn composer(&self) -> PromptComposer {
        PromptComposer::new().with_system_instruction(&self.provider.system_instruction)
    }

    /// Orchestrator wired to the configured Gemini client.
    pub fn orchestrator(&self) -> Orchestrator {
        let client = Arc::new(self.gemini_client());
        Orchestrator::new(client.clone(), client, self.composer(), self.settings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config: VermeerConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config, VermeerConfig::default());
    }
}

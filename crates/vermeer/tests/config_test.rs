// Tests for layered configuration loading.

use std::io::Write;
use vermeer::{AspectRatio, ImageSize, Tone, VermeerConfig};
use vermeer_models::DEFAULT_TEXT_MODEL;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn from_file_reads_every_section() -> anyhow::Result<()> {
    let file = write_config(
        r#"
[provider]
base_url = "http://localhost:9999/v1beta"
text_model = "text-model"
image_model = "image-model"
api_key_env = "VERMEER_TEST_KEY"
system_instruction = "Be concise."

[defaults]
tone = "Witty"
image_size = "4K"
aspect_ratio = "9:16"
"#,
    );

    let config = VermeerConfig::from_file(file.path())?;
    assert_eq!(config.provider.base_url, "http://localhost:9999/v1beta");
    assert_eq!(config.provider.api_key_env, "VERMEER_TEST_KEY");

    let settings = config.settings();
    assert_eq!(settings.tone, Tone::Witty);
    assert_eq!(settings.image_size, ImageSize::Size4K);
    assert_eq!(settings.aspect_ratio, AspectRatio::Portrait9x16);

    let client = config.gemini_client();
    assert_eq!(client.text_model(), "text-model");
    assert_eq!(client.image_model(), "image-model");
    assert_eq!(config.composer().system_instruction(), "Be concise.");
    Ok(())
}

#[test]
fn missing_keys_fall_back_to_defaults() -> anyhow::Result<()> {
    let file = write_config(
        r#"
[defaults]
tone = "Urgent"
"#,
    );

    let config = VermeerConfig::from_file(file.path())?;
    assert_eq!(config.provider.text_model, DEFAULT_TEXT_MODEL);
    assert_eq!(config.defaults.tone, Tone::Urgent);
    assert_eq!(config.defaults.aspect_ratio, AspectRatio::Auto);
    Ok(())
}

#[test]
fn unknown_tone_is_a_config_error() {
    let file = write_config(
        r#"
[defaults]
tone = "Sarcastic"
"#,
    );

    let err = VermeerConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = VermeerConfig::from_file("/nonexistent/vermeer.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read configuration"));
}

#[test]
fn orchestrator_starts_idle_with_configured_settings() -> anyhow::Result<()> {
    let file = write_config(
        r#"
[defaults]
image_size = "2K"
"#,
    );

    let orchestrator = VermeerConfig::from_file(file.path())?.orchestrator();
    assert_eq!(orchestrator.settings().image_size, ImageSize::Size2K);
    assert!(!orchestrator.snapshot().is_busy());
    Ok(())
}

//! Full generation command handler.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};
use vermeer::{
    AspectRatio, CommandOutcome, GenerationState, ImageSize, JsonError, SettingsUpdate,
    Tone, VermeerConfig, validate_aspect_ratio_label,
};

/// Options for a generation run from the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// The idea to write about
    pub idea: String,
    /// Tone label, config default when absent
    pub tone: Option<String>,
    /// Size label, config default when absent
    pub size: Option<String>,
    /// Aspect ratio label, config default when absent
    pub aspect_ratio: Option<String>,
    /// Output directory
    pub out: PathBuf,
}

fn parse_aspect_ratio(label: &str) -> AspectRatio {
    let label = label.trim();
    if label.eq_ignore_ascii_case("auto") {
        return AspectRatio::Auto;
    }
    AspectRatio::from_str(label).unwrap_or_else(|_| validate_aspect_ratio_label(label).into())
}

/// Run one full generation and write the results to `options.out`.
///
/// # Errors
///
/// Returns an error if the run-level text call fails or the output cannot be
/// written. Per-platform image failures are reported but do not fail the run.
pub async fn run_generate(
    config: &VermeerConfig,
    options: GenerateOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let orchestrator = config.orchestrator();
    let settings = orchestrator.update_settings(SettingsUpdate {
        tone: options.tone.as_deref().map(Tone::from_label),
        image_size: options.size.as_deref().map(ImageSize::from_label),
        aspect_ratio: options.aspect_ratio.as_deref().map(parse_aspect_ratio),
    })?;
    info!(
        tone = %settings.tone,
        image_size = %settings.image_size,
        aspect_ratio = %settings.aspect_ratio,
        "Generating content"
    );

    if let CommandOutcome::Failed(failure) =
        orchestrator.generate_all(&options.idea, settings.tone).await?
    {
        return Err(failure.message.into());
    }

    let state = orchestrator.snapshot();
    write_outputs(&state, &options.out)?;
    report(&state);
    Ok(())
}

fn write_outputs(state: &GenerationState, out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(out)?;

    if let Some(content) = state.content() {
        let json = serde_json::to_string_pretty(content)
            .map_err(|e| JsonError::new(format!("Failed to serialize posts: {}", e)))?;
        let path = out.join("posts.json");
        std::fs::write(&path, json)?;
        info!(path = %path.display(), "Wrote posts");
    }

    for (platform, image) in state.images() {
        let path = out.join(format!("{}.{}", platform, image.file_extension()));
        std::fs::write(&path, image.decode()?)?;
        info!(path = %path.display(), "Wrote image");
    }
    Ok(())
}

fn report(state: &GenerationState) {
    let Some(content) = state.content() else {
        return;
    };
    for post in content.posts() {
        println!("== {} ==", post.platform.label());
        println!("{}", post.content);
        if !post.hashtags.is_empty() {
            println!("{}", post.hashtags.join(" "));
        }
        println!();
    }
    for (platform, failure) in state.platform_errors() {
        warn!(platform = %platform, error = %failure.message, "Platform incomplete");
        eprintln!("{}: {}", platform.label(), failure.message);
    }
}

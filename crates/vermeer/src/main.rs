//! Vermeer CLI binary.
//!
//! - Generate posts and images for every platform from one idea
//! - Preview the image style string for a platform/tone/size

use clap::Parser;
use vermeer::{VermeerConfig, init_tracing};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, GenerateOptions, print_styles, run_generate};

    // Pick up GEMINI_API_KEY and friends from a .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose).map_err(|e| e as Box<dyn std::error::Error>)?;

    let config = match &cli.config {
        Some(path) => VermeerConfig::from_file(path)?,
        None => VermeerConfig::load()?,
    };

    match cli.command {
        Commands::Generate {
            idea,
            tone,
            size,
            aspect_ratio,
            out,
        } => {
            run_generate(
                &config,
                GenerateOptions {
                    idea,
                    tone,
                    size,
                    aspect_ratio,
                    out,
                },
            )
            .await?;
        }

        Commands::Styles {
            platform,
            tone,
            size,
        } => {
            print_styles(&platform, &tone, &size)?;
        }
    }

    Ok(())
}

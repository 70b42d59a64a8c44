//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vermeer - turn one idea into platform-tailored posts with generated images
#[derive(Parser, Debug)]
#[command(name = "vermeer")]
#[command(about = "Turn one idea into platform-tailored posts with generated images", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load configuration from this file instead of the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate posts and images for every platform
    Generate {
        /// The idea to write about
        #[arg(long)]
        idea: String,

        /// Voice preset (Professional, Witty, Urgent, Empathetic, Controversial)
        #[arg(long)]
        tone: Option<String>,

        /// Image fidelity tier (1K, 2K, 4K)
        #[arg(long)]
        size: Option<String>,

        /// Aspect ratio (Auto, 1:1, 3:4, 4:3, 9:16, 16:9)
        #[arg(long)]
        aspect_ratio: Option<String>,

        /// Directory for posts.json and the images
        #[arg(long, default_value = "vermeer-output")]
        out: PathBuf,
    },

    /// Print the image style string for a platform, tone, and size
    Styles {
        /// Platform (linkedin, twitter, instagram)
        #[arg(long)]
        platform: String,

        /// Voice preset
        #[arg(long, default_value = "Professional")]
        tone: String,

        /// Image fidelity tier
        #[arg(long, default_value = "1K")]
        size: String,
    },
}

//! Error types for the Vermeer social content generator.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vermeer_error::{ProviderError, ProviderErrorKind, VermeerResult};
//!
//! fn fetch_post() -> VermeerResult<String> {
//!     Err(ProviderError::new(ProviderErrorKind::NoResponse))?
//! }
//!
//! match fetch_post() {
//!     Ok(post) => println!("Got: {}", post),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod orchestrator;
mod provider;

pub use config::ConfigError;
pub use error::{VermeerError, VermeerErrorKind, VermeerResult};
pub use json::JsonError;
pub use orchestrator::{OrchestratorError, OrchestratorErrorKind};
pub use provider::{PERMISSION_DENIED_MESSAGE, ProviderError, ProviderErrorKind};

//! Generation orchestration for Vermeer.
//!
//! The [`Orchestrator`] drives one batch text call followed by an independent
//! image call per platform, and exposes the live [`GenerationState`] to a
//! presentation layer. Every state write is guarded by a per-[`Scope`] token,
//! so a response that resolves after a newer request for the same scope is
//! discarded rather than applied.
//!
//! Provider failures never escape as errors. They are recorded in the state as
//! a [`GenerationFailure`] (run-level for the initial text call, platform-level
//! for everything else). Commands only return `Err` when refused outright.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod failure;
mod orchestrator;
mod state;
mod tokens;

pub use failure::{FailureKind, GenerationFailure};
pub use orchestrator::{CommandOutcome, Orchestrator};
pub use state::GenerationState;
pub use tokens::{Scope, ScopeTokens};

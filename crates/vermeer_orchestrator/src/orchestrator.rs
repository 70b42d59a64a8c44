//! The generation state machine.

use crate::{GenerationFailure, GenerationState, Scope, ScopeTokens};
use futures::future::join_all;
use std::sync::{Arc, Mutex, PoisonError};
use strum::IntoEnumIterator;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};
use vermeer_core::{GeneratedContent, ImagePayload, Platform, Settings, SettingsUpdate, Tone};
use vermeer_error::{OrchestratorError, OrchestratorErrorKind, VermeerResult};
use vermeer_interface::{ImageProvider, StructuredTextProvider};
use vermeer_prompt::{PromptComposer, extract_image, parse_generated_content};

/// How an accepted command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The result was applied to the state
    Completed,
    /// The failure was recorded in the state
    Failed(GenerationFailure),
    /// A newer request for the same scope started first; nothing was applied
    Superseded,
}

#[derive(Debug, Default)]
struct Ledger {
    state: GenerationState,
    tokens: ScopeTokens,
    settings: Settings,
}

struct Inner {
    text: Arc<dyn StructuredTextProvider>,
    images: Arc<dyn ImageProvider>,
    composer: PromptComposer,
    ledger: Mutex<Ledger>,
    updates: watch::Sender<GenerationState>,
}

/// Drives text and image generation and owns the [`GenerationState`].
///
/// Cloning is cheap; clones share the same state.
///
/// # Concurrency
///
/// The ledger lock is held only for bookkeeping, never across a provider
/// call. Each image call writes its own platform's slot, so platforms finish
/// in any order without affecting one another.
#[derive(Clone)]
pub struct Orchestrator {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("text_provider", &self.inner.text.provider_name())
            .field("image_provider", &self.inner.images.provider_name())
            .field("composer", &self.inner.composer)
            .finish_non_exhaustive()
    }
}

/// In-flight marker for one accepted command.
///
/// Dropping it before [`Pending::settle`] clears the scope's flag, unless a
/// newer command for the same scope has taken over.
struct Pending {
    orchestrator: Orchestrator,
    scope: Scope,
    token: u64,
    settled: bool,
}

impl Pending {
    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for Pending {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let (scope, token) = (self.scope, self.token);
        self.orchestrator.update(|ledger| {
            if ledger.tokens.is_current(scope, token) {
                warn!(scope = %scope, token, "Command dropped before completion");
                ledger.state.abandon(scope);
            }
        });
    }
}

fn busy(reason: &str) -> OrchestratorError {
    OrchestratorError::new(OrchestratorErrorKind::Busy(reason.to_string()))
}

impl Orchestrator {
    /// Create an idle orchestrator with the given initial settings.
    pub fn new(
        text: Arc<dyn StructuredTextProvider>,
        images: Arc<dyn ImageProvider>,
        composer: PromptComposer,
        settings: Settings,
    ) -> Self {
        let ledger = Ledger {
            settings,
            ..Default::default()
        };
        let (updates, _) = watch::channel(ledger.state.clone());
        Self {
            inner: Arc::new(Inner {
                text,
                images,
                composer,
                ledger: Mutex::new(ledger),
                updates,
            }),
        }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> GenerationState {
        self.lock().state.clone()
    }

    /// Current settings.
    pub fn settings(&self) -> Settings {
        self.lock().settings
    }

    /// Receive a fresh [`GenerationState`] after every change.
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.inner.updates.subscribe()
    }

    /// Merge `update` into the settings. Applies to the next command only.
    ///
    /// # Errors
    ///
    /// Returns `Busy` while any operation is in flight.
    #[instrument(skip(self))]
    pub fn update_settings(&self, update: SettingsUpdate) -> VermeerResult<Settings> {
        let mut ledger = self.lock();
        if ledger.state.is_busy() {
            return Err(busy("settings are locked while generating").into());
        }
        ledger.settings = ledger.settings.merged(&update);
        debug!(settings = ?ledger.settings, "Settings updated");
        Ok(ledger.settings)
    }

    /// Full run: one batch text call, then one image call per platform.
    ///
    /// Clears previous results first. A text failure is recorded as the
    /// run-level error and leaves content and images empty. Image failures
    /// are recorded per platform and do not change the outcome.
    ///
    /// # Errors
    ///
    /// Returns `Busy` unless the orchestrator is idle.
    #[instrument(skip_all, fields(tone = %tone, token = tracing::field::Empty))]
    pub async fn generate_all(&self, idea: &str, tone: Tone) -> VermeerResult<CommandOutcome> {
        let (token, settings) = self.update(|ledger| {
            if ledger.state.is_busy() {
                return Err(busy("a generation is already in progress"));
            }
            ledger.state.begin_run();
            Ok((ledger.tokens.issue(Scope::Run), ledger.settings))
        })?;
        let pending = self.pending(Scope::Run, token);
        tracing::Span::current().record("token", token);
        info!("Starting generation run");

        let result = self.request_content(Scope::Run, idea, tone).await;

        let applied = self.update(|ledger| {
            if !ledger.tokens.is_current(Scope::Run, token) {
                return None;
            }
            ledger.state.finish_run_text(result.clone());
            let Ok(content) = &result else {
                return Some(Vec::new());
            };
            // Images strictly follow the text that produced their prompts.
            let jobs: Vec<_> = Platform::iter()
                .map(|platform| {
                    ledger.state.begin_image(platform);
                    let image_token = ledger.tokens.issue(Scope::Image(platform));
                    let prompt = content.post(platform).image_prompt.clone();
                    (platform, image_token, prompt)
                })
                .collect();
            Some(jobs)
        });
        pending.settle();

        let Some(jobs) = applied else {
            debug!(token, "Discarding superseded run");
            return Ok(CommandOutcome::Superseded);
        };
        if let Err(failure) = result {
            return Ok(CommandOutcome::Failed(failure));
        }

        let outcomes = join_all(jobs.into_iter().map(|(platform, image_token, prompt)| {
            let pending = self.pending(Scope::Image(platform), image_token);
            self.run_image(platform, pending, prompt, tone, settings)
        }))
        .await;

        let failed = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, CommandOutcome::Failed(_)))
            .count();
        info!(images = outcomes.len(), failed, "Generation run finished");
        Ok(CommandOutcome::Completed)
    }

    /// Regenerate one platform's text.
    ///
    /// Only `platform`'s stored post is replaced; the other posts keep their
    /// current text even though the provider answers for every platform.
    ///
    /// # Errors
    ///
    /// Returns `Busy` while a full run's text call is outstanding.
    #[instrument(skip_all, fields(platform = %platform, tone = %tone, token = tracing::field::Empty))]
    pub async fn regenerate_text(
        &self,
        platform: Platform,
        idea: &str,
        tone: Tone,
    ) -> VermeerResult<CommandOutcome> {
        let scope = Scope::Text(platform);
        let token = self.update(|ledger| {
            if ledger.state.is_generating_text() {
                return Err(busy("a generation run is producing text"));
            }
            ledger.state.begin_text(platform);
            Ok(ledger.tokens.issue(scope))
        })?;
        let pending = self.pending(scope, token);
        tracing::Span::current().record("token", token);

        // The provider only offers the all-platform schema, so a single
        // platform costs a full batch call. Revisit if a per-platform
        // structured request becomes available.
        let result = self.request_content(scope, idea, tone).await;

        let outcome = self.update(|ledger| {
            if !ledger.tokens.is_current(scope, token) {
                debug!(token, current = ?ledger.tokens.current(scope), "Discarding superseded text");
                return CommandOutcome::Superseded;
            }
            let outcome = match &result {
                Ok(_) => CommandOutcome::Completed,
                Err(failure) => CommandOutcome::Failed(failure.clone()),
            };
            ledger.state.finish_text(platform, result);
            outcome
        });
        pending.settle();
        Ok(outcome)
    }

    /// Regenerate one platform's image from an explicit prompt.
    ///
    /// Supersedes any outstanding image call for `platform`, including one
    /// issued by a full run. On failure the previous image is kept.
    ///
    /// # Errors
    ///
    /// Returns `Busy` while a full run's text call is outstanding.
    #[instrument(skip_all, fields(platform = %platform, tone = %tone, token = tracing::field::Empty))]
    pub async fn regenerate_image(
        &self,
        platform: Platform,
        image_prompt: &str,
        tone: Tone,
        settings: Settings,
    ) -> VermeerResult<CommandOutcome> {
        let token = self.update(|ledger| {
            if ledger.state.is_generating_text() {
                return Err(busy("a generation run is producing text"));
            }
            ledger.state.begin_image(platform);
            Ok(ledger.tokens.issue(Scope::Image(platform)))
        })?;
        let pending = self.pending(Scope::Image(platform), token);
        tracing::Span::current().record("token", token);

        Ok(self
            .run_image(platform, pending, image_prompt.to_string(), tone, settings)
            .await)
    }

    async fn request_content(
        &self,
        scope: Scope,
        idea: &str,
        tone: Tone,
    ) -> Result<GeneratedContent, GenerationFailure> {
        let request = self.inner.composer.build_text_request(idea, tone);
        let result = match self.inner.text.generate_structured(&request).await {
            Ok(response) => parse_generated_content(&response),
            Err(err) => Err(err),
        };
        result.map_err(|err| {
            let failure = GenerationFailure::from_error(scope, &err);
            error!(scope = %scope, error = %err, "Text generation failed");
            failure
        })
    }

    #[instrument(skip_all, fields(platform = %platform, token = pending.token))]
    async fn run_image(
        &self,
        platform: Platform,
        pending: Pending,
        image_prompt: String,
        tone: Tone,
        settings: Settings,
    ) -> CommandOutcome {
        let scope = Scope::Image(platform);
        let request =
            self.inner
                .composer
                .build_image_request(platform, &image_prompt, tone, &settings);

        let result: Result<ImagePayload, GenerationFailure> =
            match self.inner.images.generate_image(&request).await {
                Ok(response) => extract_image(&response),
                Err(err) => Err(err),
            }
            .map_err(|err| {
                warn!(error = %err, "Image generation failed");
                GenerationFailure::from_error(scope, &err)
            });

        let token = pending.token;
        let outcome = self.update(|ledger| {
            if !ledger.tokens.is_current(scope, token) {
                debug!(current = ?ledger.tokens.current(scope), "Discarding superseded image");
                return CommandOutcome::Superseded;
            }
            let outcome = match &result {
                Ok(_) => CommandOutcome::Completed,
                Err(failure) => CommandOutcome::Failed(failure.clone()),
            };
            ledger.state.finish_image(platform, result);
            outcome
        });
        pending.settle();
        outcome
    }

    fn pending(&self, scope: Scope, token: u64) -> Pending {
        Pending {
            orchestrator: self.clone(),
            scope,
            token,
            settled: false,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Ledger> {
        self.inner
            .ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate the ledger and publish the resulting state.
    fn update<R>(&self, f: impl FnOnce(&mut Ledger) -> R) -> R {
        let mut ledger = self.lock();
        let result = f(&mut ledger);
        self.inner.updates.send_replace(ledger.state.clone());
        result
    }
}

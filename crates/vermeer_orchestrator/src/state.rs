//! The orchestrator's live view of a run.

use crate::{GenerationFailure, Scope};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use vermeer_core::{GeneratedContent, ImagePayload, Platform};

/// Snapshot of everything a presentation layer renders.
///
/// Only the orchestrator writes this; readers get clones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationState {
    generating_text: bool,
    text_pending: BTreeSet<Platform>,
    images_pending: BTreeSet<Platform>,
    error: Option<GenerationFailure>,
    platform_errors: BTreeMap<Platform, GenerationFailure>,
    content: Option<GeneratedContent>,
    images: BTreeMap<Platform, ImagePayload>,
}

impl GenerationState {
    /// Whether a full run's batch text call is outstanding.
    ///
    /// Single-platform text regenerations do not raise this flag; see
    /// [`GenerationState::is_generating_text_for`].
    pub fn is_generating_text(&self) -> bool {
        self.generating_text
    }

    /// Whether text for `platform` is being (re)generated.
    pub fn is_generating_text_for(&self, platform: Platform) -> bool {
        self.generating_text || self.text_pending.contains(&platform)
    }

    /// Whether any image call is outstanding.
    pub fn is_generating_images(&self) -> bool {
        !self.images_pending.is_empty()
    }

    /// Whether the image for `platform` is outstanding.
    pub fn is_generating_image_for(&self, platform: Platform) -> bool {
        self.images_pending.contains(&platform)
    }

    /// Whether any operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.generating_text || !self.text_pending.is_empty() || !self.images_pending.is_empty()
    }

    /// Run-level failure of the last full run.
    pub fn error(&self) -> Option<&GenerationFailure> {
        self.error.as_ref()
    }

    /// Latest failure scoped to `platform`.
    pub fn platform_error(&self, platform: Platform) -> Option<&GenerationFailure> {
        self.platform_errors.get(&platform)
    }

    /// All platform-scoped failures.
    pub fn platform_errors(&self) -> &BTreeMap<Platform, GenerationFailure> {
        &self.platform_errors
    }

    /// Current posts, if a text call has succeeded.
    pub fn content(&self) -> Option<&GeneratedContent> {
        self.content.as_ref()
    }

    /// Current image for `platform`.
    pub fn image(&self, platform: Platform) -> Option<&ImagePayload> {
        self.images.get(&platform)
    }

    /// All current images.
    pub fn images(&self) -> &BTreeMap<Platform, ImagePayload> {
        &self.images
    }

    pub(crate) fn begin_run(&mut self) {
        self.generating_text = true;
        self.error = None;
        self.platform_errors.clear();
        self.content = None;
        self.images.clear();
    }

    pub(crate) fn finish_run_text(&mut self, result: Result<GeneratedContent, GenerationFailure>) {
        self.generating_text = false;
        match result {
            Ok(content) => self.content = Some(content),
            Err(failure) => self.error = Some(failure),
        }
    }

    pub(crate) fn begin_text(&mut self, platform: Platform) {
        self.text_pending.insert(platform);
        self.clear_platform_error(Scope::Text(platform));
    }

    pub(crate) fn finish_text(
        &mut self,
        platform: Platform,
        result: Result<GeneratedContent, GenerationFailure>,
    ) {
        self.text_pending.remove(&platform);
        match result {
            Ok(fresh) => match self.content.as_mut() {
                Some(content) => {
                    content.replace(fresh.post(platform).clone());
                }
                None => {
                    self.content = Some(fresh);
                    self.error = None;
                }
            },
            Err(failure) => {
                self.platform_errors.insert(platform, failure);
            }
        }
    }

    pub(crate) fn begin_image(&mut self, platform: Platform) {
        self.images_pending.insert(platform);
        self.clear_platform_error(Scope::Image(platform));
    }

    pub(crate) fn finish_image(
        &mut self,
        platform: Platform,
        result: Result<ImagePayload, GenerationFailure>,
    ) {
        self.images_pending.remove(&platform);
        match result {
            Ok(image) => {
                self.images.insert(platform, image);
            }
            Err(failure) => {
                self.platform_errors.insert(platform, failure);
            }
        }
    }

    /// Drop the in-flight flag of a command that will never finish.
    pub(crate) fn abandon(&mut self, scope: Scope) {
        match scope {
            Scope::Run => self.generating_text = false,
            Scope::Text(platform) => {
                self.text_pending.remove(&platform);
            }
            Scope::Image(platform) => {
                self.images_pending.remove(&platform);
            }
        }
    }

    fn clear_platform_error(&mut self, scope: Scope) {
        let (Scope::Text(platform) | Scope::Image(platform)) = scope else {
            return;
        };
        if self
            .platform_errors
            .get(&platform)
            .is_some_and(|failure| failure.scope == scope)
        {
            self.platform_errors.remove(&platform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;
    use strum::IntoEnumIterator;
    use vermeer_core::SocialPost;

    fn failure(scope: Scope) -> GenerationFailure {
        GenerationFailure {
            scope,
            kind: FailureKind::Transport,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn images_flag_tracks_outstanding_platforms() {
        let mut state = GenerationState::default();
        state.begin_image(Platform::Linkedin);
        state.begin_image(Platform::Twitter);

        state.finish_image(Platform::Linkedin, Ok(ImagePayload::new("image/png", "a")));
        assert!(state.is_generating_images());
        assert!(state.is_generating_image_for(Platform::Twitter));
        assert!(!state.is_generating_image_for(Platform::Linkedin));

        state.finish_image(Platform::Twitter, Err(failure(Scope::Image(Platform::Twitter))));
        assert!(!state.is_generating_images());
        assert!(!state.is_busy());
    }

    #[test]
    fn failed_image_keeps_previous_payload() {
        let mut state = GenerationState::default();
        let original = ImagePayload::new("image/png", "first");
        state.finish_image(Platform::Instagram, Ok(original.clone()));

        state.begin_image(Platform::Instagram);
        state.finish_image(
            Platform::Instagram,
            Err(failure(Scope::Image(Platform::Instagram))),
        );

        assert_eq!(state.image(Platform::Instagram), Some(&original));
        assert!(state.platform_error(Platform::Instagram).is_some());
    }

    #[test]
    fn starting_a_scope_clears_only_its_own_error() {
        let mut state = GenerationState::default();
        state.finish_image(Platform::Twitter, Err(failure(Scope::Image(Platform::Twitter))));

        state.begin_text(Platform::Twitter);
        assert!(state.platform_error(Platform::Twitter).is_some());

        state.begin_image(Platform::Twitter);
        assert!(state.platform_error(Platform::Twitter).is_none());
    }

    #[test]
    fn text_regeneration_flags_only_its_platform() {
        let mut state = GenerationState::default();
        state.begin_text(Platform::Twitter);

        assert!(!state.is_generating_text());
        assert!(state.is_generating_text_for(Platform::Twitter));
        assert!(!state.is_generating_text_for(Platform::Linkedin));
        assert!(state.is_busy());
    }

    #[test]
    fn text_regeneration_after_failed_run_clears_run_error() {
        let mut state = GenerationState::default();
        state.begin_run();
        state.finish_run_text(Err(failure(Scope::Run)));

        let content = GeneratedContent::new(Platform::iter().map(|platform| SocialPost {
            platform,
            content: format!("{} post", platform),
            image_prompt: format!("{} scene", platform),
            hashtags: Vec::new(),
        }))
        .unwrap();
        state.begin_text(Platform::Twitter);
        state.finish_text(Platform::Twitter, Ok(content));

        assert!(state.content().is_some());
        assert!(state.error().is_none());
    }

    #[test]
    fn abandoning_a_scope_clears_only_its_flag() {
        let mut state = GenerationState::default();
        state.begin_image(Platform::Linkedin);
        state.begin_image(Platform::Twitter);
        state.begin_text(Platform::Instagram);

        state.abandon(Scope::Image(Platform::Linkedin));
        assert!(!state.is_generating_image_for(Platform::Linkedin));
        assert!(state.is_generating_image_for(Platform::Twitter));

        state.abandon(Scope::Image(Platform::Twitter));
        state.abandon(Scope::Text(Platform::Instagram));
        assert!(!state.is_busy());

        state.begin_run();
        state.abandon(Scope::Run);
        assert!(!state.is_generating_text());
    }

    #[test]
    fn run_start_resets_results() {
        let mut state = GenerationState::default();
        state.finish_image(Platform::Twitter, Ok(ImagePayload::new("image/png", "a")));
        state.finish_run_text(Err(failure(Scope::Run)));

        state.begin_run();
        assert!(state.is_generating_text());
        assert!(state.is_generating_text_for(Platform::Instagram));
        assert!(state.error().is_none());
        assert!(state.images().is_empty());
        assert!(state.content().is_none());
    }
}

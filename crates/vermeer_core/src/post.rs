//! Generated posts and the per-run content bundle.

use crate::Platform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use vermeer_error::{ProviderError, ProviderErrorKind, VermeerError, VermeerResult};

/// One platform's generated artifact.
///
/// # Examples
///
/// ```
/// use vermeer_core::{Platform, SocialPost};
///
/// let post = SocialPost {
///     platform: Platform::Twitter,
///     content: "Ship it.".to_string(),
///     image_prompt: "A rocket made of sticky notes".to_string(),
///     hashtags: vec!["#productivity".to_string()],
/// };
/// assert_eq!(post.hashtags.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    /// Platform this post targets
    pub platform: Platform,
    /// Post body
    pub content: String,
    /// Provider-facing prompt for the accompanying image
    pub image_prompt: String,
    /// Ordered hashtags, possibly empty
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// Posts for every supported platform, produced together by one text call.
///
/// Construction fails unless each platform appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Platform, SocialPost>", into = "BTreeMap<Platform, SocialPost>")]
pub struct GeneratedContent {
    posts: BTreeMap<Platform, SocialPost>,
}

impl GeneratedContent {
    /// Bundle one post per platform.
    ///
    /// # Errors
    ///
    /// Returns a malformed-response error if a platform is missing or repeated.
    pub fn new(posts: impl IntoIterator<Item = SocialPost>) -> VermeerResult<Self> {
        let mut by_platform = BTreeMap::new();
        for post in posts {
            let platform = post.platform;
            if by_platform.insert(platform, post).is_some() {
                return Err(ProviderError::new(ProviderErrorKind::MalformedResponse(format!(
                    "duplicate post for {}",
                    platform
                )))
                .into());
            }
        }
        Self::try_from(by_platform)
    }

    /// The post for `platform`.
    pub fn post(&self, platform: Platform) -> &SocialPost {
        // Every platform is present by construction.
        &self.posts[&platform]
    }

    /// Iterate posts in platform order.
    pub fn posts(&self) -> impl Iterator<Item = &SocialPost> {
        self.posts.values()
    }

    /// Replace one platform's post wholesale, returning the previous one.
    pub fn replace(&mut self, post: SocialPost) -> Option<SocialPost> {
        self.posts.insert(post.platform, post)
    }
}

impl TryFrom<BTreeMap<Platform, SocialPost>> for GeneratedContent {
    type Error = VermeerError;

    fn try_from(mut posts: BTreeMap<Platform, SocialPost>) -> VermeerResult<Self> {
        let missing: Vec<String> = Platform::iter()
            .filter(|platform| !posts.contains_key(platform))
            .map(|platform| platform.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::MalformedResponse(format!(
                "missing posts for {}",
                missing.join(", ")
            )))
            .into());
        }
        // Keys are authoritative over any platform field in the payload.
        for (platform, post) in posts.iter_mut() {
            post.platform = *platform;
        }
        Ok(Self { posts })
    }
}

impl From<GeneratedContent> for BTreeMap<Platform, SocialPost> {
    fn from(content: GeneratedContent) -> Self {
        content.posts
    }
}

//! Scripted provider mocks for orchestrator tests.
//!
//! Each mock answers from a queue of scripted replies and falls back to a
//! default answer when the queue is empty. A reply may be gated: the mock
//! holds the call open until the test releases the gate, which lets tests
//! choose the order in which concurrent calls resolve.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::sync::oneshot;
use vermeer_core::{Platform, Settings};
use vermeer_error::{ProviderError, ProviderErrorKind, VermeerResult};
use vermeer_interface::{
    ContentPart, ImageProvider, ImageRequest, ImageResponse, StructuredTextProvider, TextRequest,
    TextResponse,
};
use vermeer_orchestrator::Orchestrator;
use vermeer_prompt::PromptComposer;

/// One scripted reply.
struct Scripted<T> {
    gate: Option<oneshot::Receiver<()>>,
    result: Result<T, ProviderErrorKind>,
}

async fn play<T>(scripted: Scripted<T>) -> VermeerResult<T> {
    if let Some(gate) = scripted.gate {
        let _ = gate.await;
    }
    scripted.result.map_err(|kind| ProviderError::new(kind).into())
}

/// Posts payload for every platform. `tag` distinguishes runs.
pub fn posts_payload(tag: &str) -> Value {
    let mut root = serde_json::Map::new();
    for platform in Platform::iter() {
        root.insert(
            platform.to_string(),
            json!({
                "content": post_text(tag, platform),
                "imagePrompt": image_prompt(platform),
                "hashtags": [format!("#{}", tag)]
            }),
        );
    }
    Value::Object(root)
}

/// Post body produced by [`posts_payload`].
pub fn post_text(tag: &str, platform: Platform) -> String {
    format!("{} {} post", tag, platform)
}

/// Image prompt produced by [`posts_payload`]; unique per platform.
pub fn image_prompt(platform: Platform) -> String {
    format!("{} scene prompt", platform)
}

/// Text answer carrying `payload` as JSON.
pub fn text_ok(payload: Value) -> Result<TextResponse, ProviderErrorKind> {
    Ok(TextResponse {
        text: Some(payload.to_string()),
    })
}

/// Image answer carrying one inline PNG with `data`.
pub fn image_ok(data: &str) -> Result<ImageResponse, ProviderErrorKind> {
    Ok(ImageResponse {
        parts: vec![ContentPart::InlineData {
            mime_type: "image/png".to_string(),
            data: data.to_string(),
        }],
    })
}

/// Structured text provider answering from a script.
pub struct MockTextProvider {
    scripts: Mutex<VecDeque<Scripted<TextResponse>>>,
    fallback: Value,
    requests: Mutex<Vec<TextRequest>>,
}

impl MockTextProvider {
    /// Answers every unscripted call with [`posts_payload`]`(tag)`.
    pub fn new(tag: &str) -> Self {
        Self {
            scripts: Mutex::new(VecDeque::new()),
            fallback: posts_payload(tag),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a reply.
    pub fn push(&self, result: Result<TextResponse, ProviderErrorKind>) {
        self.scripts.lock().unwrap().push_back(Scripted { gate: None, result });
    }

    /// Queue a reply held until the returned sender fires (or is dropped).
    pub fn push_gated(&self, result: Result<TextResponse, ProviderErrorKind>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.scripts.lock().unwrap().push_back(Scripted {
            gate: Some(rx),
            result,
        });
        tx
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<TextRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StructuredTextProvider for MockTextProvider {
    async fn generate_structured(&self, req: &TextRequest) -> VermeerResult<TextResponse> {
        self.requests.lock().unwrap().push(req.clone());
        let next = self.scripts.lock().unwrap().pop_front();
        match next {
            Some(scripted) => play(scripted).await,
            None => Ok(TextResponse {
                text: Some(self.fallback.to_string()),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-text"
    }
}

/// Image provider answering from per-platform scripts.
///
/// Requests are matched to platforms through [`image_prompt`]. Unscripted
/// calls succeed with data `"{platform}-{n}"`, `n` counting calls.
pub struct MockImageProvider {
    scripts: Mutex<HashMap<Platform, VecDeque<Scripted<ImageResponse>>>>,
    requests: Mutex<Vec<ImageRequest>>,
}

impl Default for MockImageProvider {
    fn default() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockImageProvider {
    /// Queue a reply for `platform`.
    pub fn push(&self, platform: Platform, result: Result<ImageResponse, ProviderErrorKind>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(platform)
            .or_default()
            .push_back(Scripted { gate: None, result });
    }

    /// Queue a gated reply for `platform`.
    pub fn push_gated(
        &self,
        platform: Platform,
        result: Result<ImageResponse, ProviderErrorKind>,
    ) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.scripts
            .lock()
            .unwrap()
            .entry(platform)
            .or_default()
            .push_back(Scripted {
                gate: Some(rx),
                result,
            });
        tx
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests received for `platform`.
    pub fn requests_for(&self, platform: Platform) -> Vec<ImageRequest> {
        self.requests()
            .into_iter()
            .filter(|req| req.prompt.contains(&image_prompt(platform)))
            .collect()
    }

    fn platform_of(req: &ImageRequest) -> Option<Platform> {
        Platform::iter().find(|platform| req.prompt.contains(&image_prompt(*platform)))
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn generate_image(&self, req: &ImageRequest) -> VermeerResult<ImageResponse> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len()
        };
        let platform = Self::platform_of(req);
        let next = platform.and_then(|platform| {
            self.scripts
                .lock()
                .unwrap()
                .get_mut(&platform)
                .and_then(VecDeque::pop_front)
        });
        match next {
            Some(scripted) => play(scripted).await,
            None => {
                let name = platform.map(|p| p.to_string()).unwrap_or_default();
                image_ok(&format!("{}-{}", name, call))
                    .map_err(|kind| ProviderError::new(kind).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-image"
    }
}

/// Orchestrator wired to fresh mocks.
pub fn orchestrator(
    text: &Arc<MockTextProvider>,
    images: &Arc<MockImageProvider>,
) -> Orchestrator {
    Orchestrator::new(
        text.clone(),
        images.clone(),
        PromptComposer::new(),
        Settings::default(),
    )
}

/// Wait until `probe` reports at least `n`, failing the test after a second.
pub async fn wait_until(mut probe: impl FnMut() -> usize, n: usize) {
    tokio::time::timeout(Duration::from_secs(1), async {
        while probe() < n {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

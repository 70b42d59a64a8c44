//! Per-scope request tokens used to detect superseded responses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vermeer_core::Platform;

/// Granularity of an operation and of the state it may write.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    /// The batch text call of a full run
    #[display("run")]
    Run,
    /// One platform's text
    #[display("text:{}", _0)]
    Text(Platform),
    /// One platform's image
    #[display("image:{}", _0)]
    Image(Platform),
}

/// Monotonic token issuer.
///
/// Issuing a token for a scope makes every earlier token for that scope stale.
/// Tokens are unique across scopes.
#[derive(Debug, Default)]
pub struct ScopeTokens {
    last: u64,
    current: BTreeMap<Scope, u64>,
}

impl ScopeTokens {
    /// Issue a fresh token for `scope`, superseding any outstanding one.
    pub fn issue(&mut self, scope: Scope) -> u64 {
        self.last += 1;
        self.current.insert(scope, self.last);
        self.last
    }

    /// Whether `token` is still the authoritative one for `scope`.
    pub fn is_current(&self, scope: Scope, token: u64) -> bool {
        self.current.get(&scope) == Some(&token)
    }

    /// The authoritative token for `scope`, if one was ever issued.
    pub fn current(&self, scope: Scope) -> Option<u64> {
        self.current.get(&scope).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_token_supersedes_older() {
        let mut tokens = ScopeTokens::default();
        let first = tokens.issue(Scope::Image(Platform::Twitter));
        let second = tokens.issue(Scope::Image(Platform::Twitter));

        assert!(second > first);
        assert!(!tokens.is_current(Scope::Image(Platform::Twitter), first));
        assert!(tokens.is_current(Scope::Image(Platform::Twitter), second));
    }

    #[test]
    fn scopes_are_independent() {
        let mut tokens = ScopeTokens::default();
        let image = tokens.issue(Scope::Image(Platform::Linkedin));
        tokens.issue(Scope::Image(Platform::Instagram));
        tokens.issue(Scope::Text(Platform::Linkedin));

        assert!(tokens.is_current(Scope::Image(Platform::Linkedin), image));
        assert_eq!(tokens.current(Scope::Run), None);
    }

    #[test]
    fn scope_display_names_platform() {
        assert_eq!(Scope::Run.to_string(), "run");
        assert_eq!(Scope::Text(Platform::Twitter).to_string(), "text:twitter");
        assert_eq!(Scope::Image(Platform::Instagram).to_string(), "image:instagram");
    }
}

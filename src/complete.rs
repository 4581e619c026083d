//! Tab-completion engine
//!
//! Collects candidates from registered providers and narrows them to a
//! shared prefix. Providers are untrusted with respect to failure: a
//! provider that errors is logged and skipped, never aborting collection
//! for the rest.

use crate::error::ProviderError;
use crate::shell::{has_trailing_whitespace, ShellTokenizer, Tokenize};

/// A source of completion candidates.
///
/// `active` is the index of the token being completed in `tokens`; it is
/// one past the end when the cursor sits on a fresh, empty token. What the
/// original callback took as fixed trailing arguments become fields of the
/// implementing type (or captures of a closure — closures implement this
/// trait directly).
pub trait CompletionProvider {
    fn candidates(&self, active: usize, tokens: &[String]) -> Result<Vec<String>, ProviderError>;

    /// Name used to attribute log lines when this provider fails.
    fn name(&self) -> &str {
        "provider"
    }
}

impl<F> CompletionProvider for F
where
    F: Fn(usize, &[String]) -> Result<Vec<String>, ProviderError>,
{
    fn candidates(&self, active: usize, tokens: &[String]) -> Result<Vec<String>, ProviderError> {
        self(active, tokens)
    }
}

/// Orchestrates candidate collection across providers.
///
/// Holds no other state; `collect_candidates` is a pure function of the
/// input and the registered providers, so an engine can be shared freely
/// across threads.
pub struct CompletionEngine {
    providers: Vec<Box<dyn CompletionProvider + Send + Sync>>,
    tokenizer: Box<dyn Tokenize + Send + Sync>,
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionEngine {
    pub fn new() -> Self {
        Self::with_tokenizer(ShellTokenizer)
    }

    /// Build an engine around a different tokenizer collaborator.
    pub fn with_tokenizer(tokenizer: impl Tokenize + Send + Sync + 'static) -> Self {
        Self {
            providers: Vec::new(),
            tokenizer: Box::new(tokenizer),
        }
    }

    pub fn register(&mut self, provider: impl CompletionProvider + Send + Sync + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Gather candidates for the token under the cursor at the end of
    /// `input`.
    ///
    /// Tokenizes, determines the active token (a token-less input completes
    /// an empty first token; input ending in fresh whitespace completes an
    /// empty token one past the last), invokes every provider in
    /// registration order, and keeps the candidates that start with the
    /// active token's text. A failing provider contributes nothing and is
    /// logged via `tracing`; the remaining providers still run.
    pub fn collect_candidates(&self, input: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(input);
        let (active, text) = if tokens.is_empty() {
            (0, String::new())
        } else if has_trailing_whitespace(input) {
            (tokens.len(), String::new())
        } else {
            (tokens.len() - 1, tokens[tokens.len() - 1].clone())
        };

        let mut collected = Vec::new();
        for provider in &self.providers {
            match provider.candidates(active, &tokens) {
                Ok(candidates) => collected.extend(candidates),
                Err(error) => {
                    tracing::warn!(
                        provider = provider.name(),
                        %error,
                        "completion provider failed, skipping"
                    );
                }
            }
        }

        collected.retain(|candidate| candidate.starts_with(&text));
        tracing::debug!(
            active,
            token = %text,
            count = collected.len(),
            "collected completion candidates"
        );
        collected
    }
}

impl std::fmt::Debug for CompletionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionEngine")
            .field("providers", &self.providers.len())
            .finish_non_exhaustive()
    }
}

/// Longest prefix of `candidates[0]`, extending `prefix`, shared by every
/// candidate.
///
/// Returns `None` when `candidates` is empty or some candidate does not
/// start with the original `prefix` — both signal caller misuse, and a
/// caller must treat `None` as "abort narrowing" rather than an empty
/// result.
pub fn shared_prefix(prefix: &str, candidates: &[String]) -> Option<String> {
    if candidates.is_empty() || candidates.iter().any(|c| !c.starts_with(prefix)) {
        return None;
    }

    let first = candidates[0].as_str();
    let mut end = prefix.len();
    for c in first[end..].chars() {
        let next = end + c.len_utf8();
        if !candidates.iter().all(|cand| cand.starts_with(&first[..next])) {
            break;
        }
        end = next;
    }

    Some(first[..end].to_string())
}

//! The overflow accumulator: tokens no descriptor claimed, kept for
//! verbatim replay to the downstream application.
//!
//! Three views are co-maintained over one ordered token stream:
//!
//! - a **named** map for `--key=value` tokens, whose merge policy
//!   (last-write-wins vs first-write-wins) is selected per call;
//! - an **unnamed** ordered list for bare `--key` flags and positional
//!   tokens;
//! - the **raw** sequence of every merged token, verbatim and in
//!   presentation order across all sources. [`args()`](DownstreamArgs::args)
//!   reconstructs the downstream argv from it — that array is the only
//!   contract with the launched process.

use std::collections::HashMap;

/// Ordered store of tokens unrecognized by the option table.
#[derive(Debug, Clone, Default)]
pub struct DownstreamArgs {
    named: HashMap<String, String>,
    unnamed: Vec<String>,
    raw: Vec<String>,
}

impl DownstreamArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one token.
    ///
    /// `--key=value` upserts into the named map; `overwrite` decides
    /// whether a later value replaces an existing one. Bare `--key` flags
    /// and positional tokens go to the unnamed list. The verbatim token is
    /// appended to the raw sequence regardless of branch.
    pub fn merge(&mut self, token: &str, overwrite: bool) {
        if let Some(rest) = token.strip_prefix("--")
            && let Some((key, value)) = rest.split_once('=')
        {
            if overwrite || !self.named.contains_key(key) {
                self.named.insert(key.to_string(), value.to_string());
            }
        } else {
            self.unnamed.push(token.to_string());
        }
        self.raw.push(token.to_string());
    }

    /// [`merge`](Self::merge) with last-write-wins fixed.
    pub fn merge_overwriting(&mut self, token: &str) {
        self.merge(token, true);
    }

    /// [`merge`](Self::merge) with first-write-wins fixed: an already
    /// present key keeps its value.
    pub fn merge_if_absent(&mut self, token: &str) {
        self.merge(token, false);
    }

    /// The `key → value` view of `--key=value` tokens. Iteration order is
    /// not meaningful.
    pub fn named(&self) -> &HashMap<String, String> {
        &self.named
    }

    /// Bare flags and positional tokens, in presentation order.
    pub fn unnamed(&self) -> &[String] {
        &self.unnamed
    }

    /// Every merged token, verbatim, in presentation order.
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    /// The ordered argument vector to pass, unmodified, to the downstream
    /// process.
    pub fn args(&self) -> Vec<String> {
        self.raw.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

//! Embedded-resource lookup: a single blocking read with two outcomes.
//!
//! The launcher bundles its config resource next to the application;
//! fetching it either produces the content or nothing. Every failure mode
//! (missing, unreadable, not UTF-8) is downgraded to absent — a missing
//! resource is a normal condition, not an error.

use std::path::PathBuf;

use tracing::debug;

/// Fetch a named resource bundled alongside the launcher.
pub trait FetchResource {
    /// One blocking read. `None` covers every failure mode.
    fn fetch(&self, name: &str) -> Option<String>;
}

/// Reads resources as files under a fixed root directory.
pub struct FileResourceFetcher {
    root: PathBuf,
}

impl FileResourceFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FetchResource for FileResourceFetcher {
    fn fetch(&self, name: &str) -> Option<String> {
        let path = self.root.join(name);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(err) => {
                debug!(path = %path.display(), %err, "resource not readable");
                None
            }
        }
    }
}

//! Embedded-resource ingestion: match config keys against option labels.

use tracing::{debug, info, warn};

use super::{Ingest, assign};
use crate::options::LauncherOption;
use crate::resource::FetchResource;
use crate::store::{ConfigStore, Phase};

/// Reads the embedded config resource and matches its keys against the
/// descriptor labels.
///
/// The resource name is resolved when the pass runs, not at construction,
/// so an assignment made earlier in the same run (a redirected config-file)
/// is honored. A missing resource yields zero assignments and zero
/// overflow; so does a malformed one. Unmatched pairs are reformatted into
/// the canonical `--key=value` token shape (bare `--key` for blank values)
/// so overflow tokens look the same regardless of which source produced
/// them.
pub struct ResourceIngester<'a> {
    fetcher: &'a dyn FetchResource,
    resource_name: Option<String>,
}

impl<'a> ResourceIngester<'a> {
    pub fn new(fetcher: &'a dyn FetchResource) -> Self {
        Self {
            fetcher,
            resource_name: None,
        }
    }

    /// Ingest a fixed resource instead of the config-file option's current
    /// value.
    pub fn with_resource_name(mut self, name: impl Into<String>) -> Self {
        self.resource_name = Some(name.into());
        self
    }

    fn effective_name(&self, store: &ConfigStore) -> Option<String> {
        self.resource_name
            .clone()
            .or_else(|| store.get(LauncherOption::ConfigFile))
    }

    fn load(&self, store: &ConfigStore) -> Option<toml::Table> {
        let name = self.effective_name(store)?;
        info!(resource = %name, "looking for embedded config resource");

        let Some(content) = self.fetcher.fetch(&name) else {
            info!(resource = %name, "no embedded config resource found");
            return None;
        };

        match content.parse::<toml::Table>() {
            Ok(table) => {
                info!(resource = %name, keys = table.len(), "found embedded config resource");
                Some(table)
            }
            Err(err) => {
                warn!(resource = %name, %err, "embedded config resource is malformed, skipping");
                None
            }
        }
    }
}

impl Ingest for ResourceIngester<'_> {
    fn phase(&self) -> Phase {
        Phase::LoadEmbeddedConfig
    }

    fn collect(&self, store: &mut ConfigStore) -> Vec<String> {
        let Some(table) = self.load(store) else {
            return Vec::new();
        };

        let mut leftovers = Vec::new();
        for (key, value) in table {
            let value = stringify(value);
            match LauncherOption::from_label(&key) {
                Some(option) => {
                    debug!(key = %key, option = option.label(), "matched resource key");
                    assign(store, option, Some(&value), self.phase());
                }
                None => {
                    debug!(key = %key, "no matching option for resource key, forwarding downstream");
                    leftovers.push(format_leftover(&key, &value));
                }
            }
        }
        leftovers
    }
}

/// Scalar resource values become the string form the validators expect.
fn stringify(value: toml::Value) -> String {
    match value {
        toml::Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Canonical overflow token shape: `--key=value`, or bare `--key` when the
/// value is blank.
fn format_leftover(key: &str, value: &str) -> String {
    if value.trim().is_empty() {
        format!("--{key}")
    } else {
        format!("--{key}={value}")
    }
}

//! The configuration store: the mutable sink ingestion writes into.
//!
//! One [`ConfigStore`] is an explicit context object constructed per run
//! and threaded through the ingestion call chain; there is no process-wide
//! registry. The active [`Phase`] is a parameter of each assignment, so
//! independent runs (and tests) never share mutable state.

use std::collections::HashMap;

use tracing::debug;

use crate::error::ConfigError;
use crate::options::LauncherOption;

/// Lifecycle stage of the ingestion pipeline, used as a provenance tag and
/// precedence marker. Transitions are forward-only: a pass stamps its own
/// phase and later passes simply overwrite earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Before any ingestion; marks an option as never explicitly set.
    Startup,
    /// The embedded-resource pass.
    LoadEmbeddedConfig,
    /// The command-line pass.
    ParseCliArgs,
}

/// Validated, resolved option values plus per-option provenance.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    values: HashMap<LauncherOption, String>,
    provenance: HashMap<LauncherOption, Phase>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, resolve and store one assignment, stamping `phase` as the
    /// option's provenance.
    ///
    /// Fail-fast: a rejected value returns the error and leaves the option
    /// unchanged.
    pub fn set(
        &mut self,
        option: LauncherOption,
        raw: Option<&str>,
        phase: Phase,
    ) -> Result<(), ConfigError> {
        let descriptor = option.descriptor();

        if !descriptor.validator.accepts(raw) {
            return Err(ConfigError::InvalidValue {
                option: descriptor.label,
                value: raw.unwrap_or_default().to_string(),
                expected: descriptor.validator.expected(),
            });
        }

        let resolved = descriptor.resolver.resolve(raw);
        debug!(option = descriptor.label, value = %resolved, ?phase, "option set");
        self.values.insert(option, resolved);
        self.provenance.insert(option, phase);
        Ok(())
    }

    /// The stored resolved value, or the descriptor's default if the
    /// option was never set. `None` for unset options without a default.
    pub fn get(&self, option: LauncherOption) -> Option<String> {
        self.values
            .get(&option)
            .cloned()
            .or_else(|| option.default_value())
    }

    /// The phase that most recently assigned `option`; [`Phase::Startup`]
    /// when it was never explicitly set.
    pub fn provenance(&self, option: LauncherOption) -> Phase {
        self.provenance
            .get(&option)
            .copied()
            .unwrap_or(Phase::Startup)
    }

    pub fn is_set(&self, option: LauncherOption) -> bool {
        self.provenance(option) != Phase::Startup
    }

    /// Clear all stored values and provenance, returning the store to its
    /// just-initialized state.
    pub fn restore_defaults(&mut self) {
        self.values.clear();
        self.provenance.clear();
    }

    /// Options whose most recent assignment happened during `phase`.
    pub fn set_during(&self, phase: Phase) -> Vec<LauncherOption> {
        self.subset(|opt| self.provenance(opt) == phase)
    }

    /// Options that have been explicitly set by any pass.
    pub fn set_options(&self) -> Vec<LauncherOption> {
        self.subset(|opt| self.is_set(opt))
    }

    /// Options still carrying their defaults.
    pub fn unset_options(&self) -> Vec<LauncherOption> {
        self.subset(|opt| !self.is_set(opt))
    }

    fn subset(&self, predicate: impl Fn(LauncherOption) -> bool) -> Vec<LauncherOption> {
        LauncherOption::ALL
            .into_iter()
            .filter(|&opt| predicate(opt))
            .collect()
    }
}

//! The option descriptor table: every setting the launcher understands.
//!
//! Each option is one immutable [`Descriptor`] — label, match pattern,
//! default, validator, resolver — and the table is the single source of
//! truth for both ingestion sources. Command-line tokens match against the
//! descriptor pattern (`--label` or `--label=value`); resource keys match
//! by exact label equality. Table order is stable and is the only
//! tie-break when matching.
//!
//! Provenance (which phase last assigned an option) is deliberately *not*
//! kept here: descriptors are shared immutable definitions, and mutable
//! state lives in [`ConfigStore`](crate::ConfigStore) so independent
//! runs don't interfere.

use crate::resolve::Resolver;
use crate::validate::Validator;

/// One configurable launcher setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LauncherOption {
    /// Name of the embedded config resource to ingest.
    ConfigFile,
    /// URL of a remote override manifest.
    OverridesUrl,
    /// URL the application manifest is downloaded from.
    ManifestUrl,
    /// Local filename of the application manifest.
    ManifestFile,
    /// Base URL of the artifact repository.
    ArtifactsRepoUrl,
    /// Directory artifacts are cached in. Accepts `USERLIB` / `ALLUSERS`
    /// sentinel prefixes.
    CacheDir,
    /// Where launcher logs are written.
    LogFile,
    /// Skip SSL certificate verification.
    IgnoreSsl,
    /// Run without contacting any remote host.
    Offline,
    /// Abort the launch when an update fails.
    StopOnUpdateError,
    /// Allow installing an older version than the cached one.
    AcceptDowngrade,
    /// Comma-separated native libraries to load before launch.
    PreloadNativeLibs,
    /// Run without any update UI.
    Headless,
    /// URL of the release-notes page shown after updating.
    WhatsNewUrl,
    /// Keep the update screen visible until the application takes over.
    LingeringUpdateScreen,
}

/// The value captured by a successful token match: the `=value` part for a
/// value-taking option, or `None` for a bare flag hit.
pub type MatchedValue<'a> = Option<&'a str>;

/// Immutable definition of one option. Matching, validation and resolution
/// all dispatch through this record.
pub struct Descriptor {
    /// The literal token after `--`; also the resource key.
    pub label: &'static str,
    /// Whether the command-line form requires `=value`. Flag options match
    /// bare `--label` only.
    pub takes_value: bool,
    /// Some defaults depend on the environment, so they are computed per
    /// call rather than stored.
    default: fn() -> Option<String>,
    pub validator: Validator,
    pub resolver: Resolver,
}

impl Descriptor {
    /// The default value, or `None` for options with no default.
    pub fn default_value(&self) -> Option<String> {
        (self.default)()
    }
}

fn none() -> Option<String> {
    None
}

fn bool_true() -> Option<String> {
    Some("true".into())
}

fn bool_false() -> Option<String> {
    Some("false".into())
}

fn config_file_default() -> Option<String> {
    Some("launcher.toml".into())
}

fn manifest_file_default() -> Option<String> {
    Some("app.xml".into())
}

fn cache_dir_default() -> Option<String> {
    Some(".".into())
}

fn log_file_default() -> Option<String> {
    Some(
        std::env::temp_dir()
            .join("launcher.log")
            .display()
            .to_string(),
    )
}

// Indexed by discriminant; kept in the same order as `LauncherOption::ALL`.
static TABLE: [Descriptor; 15] = [
    Descriptor {
        label: "config-file",
        takes_value: true,
        default: config_file_default,
        validator: Validator::Text,
        resolver: Resolver::Identity,
    },
    Descriptor {
        label: "overrides-url",
        takes_value: true,
        default: none,
        validator: Validator::Url,
        resolver: Resolver::Identity,
    },
    Descriptor {
        label: "manifest-url",
        takes_value: true,
        default: none,
        validator: Validator::Url,
        resolver: Resolver::Identity,
    },
    Descriptor {
        label: "manifest-file",
        takes_value: true,
        default: manifest_file_default,
        validator: Validator::Text,
        resolver: Resolver::Identity,
    },
    Descriptor {
        label: "artifacts-repo-url",
        takes_value: true,
        default: none,
        validator: Validator::Url,
        resolver: Resolver::Identity,
    },
    Descriptor {
        label: "cache-dir",
        takes_value: true,
        default: cache_dir_default,
        validator: Validator::Text,
        resolver: Resolver::CacheDir,
    },
    Descriptor {
        label: "log-file",
        takes_value: true,
        default: log_file_default,
        validator: Validator::Text,
        resolver: Resolver::Identity,
    },
    Descriptor {
        label: "ignore-ssl",
        takes_value: false,
        default: bool_false,
        validator: Validator::Bool,
        resolver: Resolver::Bool,
    },
    Descriptor {
        label: "offline",
        takes_value: false,
        default: bool_false,
        validator: Validator::Bool,
        resolver: Resolver::Bool,
    },
    Descriptor {
        label: "stop-on-update-error",
        takes_value: false,
        default: bool_true,
        validator: Validator::Bool,
        resolver: Resolver::Bool,
    },
    Descriptor {
        label: "accept-downgrade",
        takes_value: false,
        default: bool_false,
        validator: Validator::Bool,
        resolver: Resolver::Bool,
    },
    Descriptor {
        label: "preload-native-libs",
        takes_value: true,
        default: none,
        validator: Validator::Text,
        resolver: Resolver::Identity,
    },
    Descriptor {
        label: "headless",
        takes_value: false,
        default: bool_false,
        validator: Validator::Bool,
        resolver: Resolver::Bool,
    },
    Descriptor {
        label: "whats-new-url",
        takes_value: true,
        default: none,
        validator: Validator::Url,
        resolver: Resolver::Identity,
    },
    Descriptor {
        label: "lingering-update-screen",
        takes_value: false,
        default: bool_true,
        validator: Validator::Bool,
        resolver: Resolver::Bool,
    },
];

impl LauncherOption {
    /// Every option, in table order. This order is stable and is the only
    /// tie-break when matching tokens.
    pub const ALL: [LauncherOption; 15] = [
        LauncherOption::ConfigFile,
        LauncherOption::OverridesUrl,
        LauncherOption::ManifestUrl,
        LauncherOption::ManifestFile,
        LauncherOption::ArtifactsRepoUrl,
        LauncherOption::CacheDir,
        LauncherOption::LogFile,
        LauncherOption::IgnoreSsl,
        LauncherOption::Offline,
        LauncherOption::StopOnUpdateError,
        LauncherOption::AcceptDowngrade,
        LauncherOption::PreloadNativeLibs,
        LauncherOption::Headless,
        LauncherOption::WhatsNewUrl,
        LauncherOption::LingeringUpdateScreen,
    ];

    pub fn descriptor(self) -> &'static Descriptor {
        &TABLE[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn default_value(self) -> Option<String> {
        self.descriptor().default_value()
    }

    /// Find the option whose label equals `key` exactly. This is how the
    /// resource source matches its keys.
    pub fn from_label(key: &str) -> Option<LauncherOption> {
        LauncherOption::ALL.into_iter().find(|opt| opt.label() == key)
    }

    /// Match one raw command-line token against this option's pattern.
    ///
    /// A value-taking option matches only `--label=value` with a non-empty
    /// value (the value is everything after the first `=`); a flag option
    /// matches only bare `--label`. No partial or prefix matches.
    pub fn match_token(self, token: &str) -> Option<MatchedValue<'_>> {
        let descriptor = self.descriptor();
        let rest = token.strip_prefix("--")?.strip_prefix(descriptor.label)?;
        if descriptor.takes_value {
            match rest.strip_prefix('=') {
                Some(value) if !value.is_empty() => Some(Some(value)),
                _ => None,
            }
        } else {
            rest.is_empty().then_some(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<&str> = LauncherOption::ALL.iter().map(|o| o.label()).collect();
        assert_eq!(labels.len(), LauncherOption::ALL.len());
    }

    #[test]
    fn table_indexing_matches_labels() {
        assert_eq!(LauncherOption::ConfigFile.label(), "config-file");
        assert_eq!(LauncherOption::CacheDir.label(), "cache-dir");
        assert_eq!(
            LauncherOption::LingeringUpdateScreen.label(),
            "lingering-update-screen"
        );
    }

    #[test]
    fn value_option_matches_with_value() {
        let matched = LauncherOption::ManifestUrl.match_token("--manifest-url=https://host/app");
        assert_eq!(matched, Some(Some("https://host/app")));
    }

    #[test]
    fn value_may_itself_contain_equals() {
        let matched = LauncherOption::ManifestUrl.match_token("--manifest-url=https://h?a=b");
        assert_eq!(matched, Some(Some("https://h?a=b")));
    }

    #[test]
    fn value_option_rejects_bare_and_empty_forms() {
        assert_eq!(LauncherOption::ManifestUrl.match_token("--manifest-url"), None);
        assert_eq!(LauncherOption::ManifestUrl.match_token("--manifest-url="), None);
    }

    #[test]
    fn flag_option_matches_bare_only() {
        assert_eq!(LauncherOption::Offline.match_token("--offline"), Some(None));
        assert_eq!(LauncherOption::Offline.match_token("--offline=true"), None);
    }

    #[test]
    fn no_partial_or_prefix_matches() {
        assert_eq!(LauncherOption::Offline.match_token("--offline-mode"), None);
        assert_eq!(LauncherOption::ManifestUrl.match_token("--manifest"), None);
        assert_eq!(LauncherOption::Offline.match_token("offline"), None);
    }

    #[test]
    fn from_label_is_exact() {
        assert_eq!(
            LauncherOption::from_label("cache-dir"),
            Some(LauncherOption::CacheDir)
        );
        assert_eq!(LauncherOption::from_label("cache"), None);
        assert_eq!(LauncherOption::from_label("--cache-dir"), None);
    }

    #[test]
    fn defaults() {
        assert_eq!(
            LauncherOption::ConfigFile.default_value().as_deref(),
            Some("launcher.toml")
        );
        assert_eq!(
            LauncherOption::ManifestFile.default_value().as_deref(),
            Some("app.xml")
        );
        assert_eq!(LauncherOption::CacheDir.default_value().as_deref(), Some("."));
        assert_eq!(LauncherOption::ManifestUrl.default_value(), None);
        assert_eq!(LauncherOption::Offline.default_value().as_deref(), Some("false"));
        assert_eq!(
            LauncherOption::StopOnUpdateError.default_value().as_deref(),
            Some("true")
        );
        let log_file = LauncherOption::LogFile.default_value().unwrap();
        assert!(log_file.ends_with("launcher.log"));
    }

    #[test]
    fn flag_options_take_no_value() {
        for opt in LauncherOption::ALL {
            let d = opt.descriptor();
            // Boolean semantics and flag patterns come as a pair.
            assert_eq!(
                d.takes_value,
                d.validator != crate::validate::Validator::Bool,
                "descriptor mismatch for {:?}",
                opt
            );
        }
    }
}

//! Raw-to-stored value resolution.
//!
//! Resolvers run after validation and map an accepted raw value to the form
//! the store keeps. Most options store their input verbatim; booleans are
//! canonicalized, and the cache directory rewrites sentinel path prefixes
//! into OS-specific locations.

use crate::platform::{GenericPath, Os};

/// Resolution strategy for one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolver {
    /// Stored value is the raw value.
    Identity,
    /// Absent/blank becomes `"true"`; explicit values are lowercased.
    Bool,
    /// Leading `USERLIB` / `ALLUSERS` sentinels become OS locations.
    CacheDir,
}

impl Resolver {
    /// Map an accepted raw value to its stored form. `raw` has already
    /// passed the option's validator.
    pub fn resolve(self, raw: Option<&str>) -> String {
        match self {
            Resolver::Identity => raw.unwrap_or_default().to_string(),
            Resolver::Bool => resolve_bool(raw),
            Resolver::CacheDir => resolve_cache_dir(Os::current(), raw.unwrap_or_default()),
        }
    }
}

fn resolve_bool(raw: Option<&str>) -> String {
    match raw {
        None => "true".into(),
        Some(s) if s.trim().is_empty() => "true".into(),
        Some(s) => s.to_ascii_lowercase(),
    }
}

/// Rewrite a leading sentinel component into the generic path for `os` and
/// join the remainder. Values without a sentinel pass through unchanged.
///
/// Sentinels are resolved when this runs, not cached, so environment
/// changes between calls are observed.
pub(crate) fn resolve_cache_dir(os: Os, raw: &str) -> String {
    let mut components = raw.split(['/', '\\']);
    let Some(first) = components.next() else {
        return raw.to_string();
    };
    let Some(label) = GenericPath::from_sentinel(first) else {
        return raw.to_string();
    };

    let mut path = os.generic_path(label);
    for component in components.filter(|c| !c.is_empty()) {
        path.push(component);
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Identity ---

    #[test]
    fn identity_returns_input_exactly() {
        assert_eq!(Resolver::Identity.resolve(Some("app.xml")), "app.xml");
        assert_eq!(
            Resolver::Identity.resolve(Some("https://host/manifest")),
            "https://host/manifest"
        );
    }

    // --- Bool ---

    #[test]
    fn bool_flag_presence_resolves_true() {
        assert_eq!(Resolver::Bool.resolve(None), "true");
        assert_eq!(Resolver::Bool.resolve(Some("")), "true");
        assert_eq!(Resolver::Bool.resolve(Some("  ")), "true");
    }

    #[test]
    fn bool_canonicalizes_case() {
        assert_eq!(Resolver::Bool.resolve(Some("TRUE")), "true");
        assert_eq!(Resolver::Bool.resolve(Some("False")), "false");
        assert_eq!(Resolver::Bool.resolve(Some("true")), "true");
    }

    // --- CacheDir ---

    #[test]
    fn cache_dir_userlib_sentinel_mac() {
        let resolved = resolve_cache_dir(Os::MacOs, "USERLIB/myapp");
        let expected = Os::MacOs
            .generic_path(GenericPath::UserLib)
            .join("myapp");
        assert_eq!(resolved, expected.display().to_string());
    }

    #[test]
    fn cache_dir_allusers_sentinel_linux() {
        let resolved = resolve_cache_dir(Os::Linux, "ALLUSERS/myapp/cache");
        assert_eq!(resolved, "/usr/local/share/myapp/cache");
    }

    #[test]
    fn cache_dir_backslash_separator() {
        let resolved = resolve_cache_dir(Os::Linux, r"ALLUSERS\myapp");
        assert_eq!(resolved, "/usr/local/share/myapp");
    }

    #[test]
    fn cache_dir_bare_sentinel() {
        let resolved = resolve_cache_dir(Os::Linux, "ALLUSERS");
        assert_eq!(resolved, "/usr/local/share");
    }

    #[test]
    fn cache_dir_without_sentinel_unchanged() {
        assert_eq!(resolve_cache_dir(Os::Linux, "."), ".");
        assert_eq!(
            resolve_cache_dir(Os::Linux, "/var/cache/myapp"),
            "/var/cache/myapp"
        );
        // Sentinel not in leading position is not a sentinel.
        assert_eq!(
            resolve_cache_dir(Os::Linux, "cache/USERLIB"),
            "cache/USERLIB"
        );
    }
}

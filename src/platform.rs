//! Operating-system detection and the generic-path table behind the
//! cache-dir sentinels.

use std::path::PathBuf;

use directories::BaseDirs;

/// An operating system the launcher runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Os {
    /// The OS this binary was built for.
    pub fn current() -> Os {
        match std::env::consts::OS {
            "windows" => Os::Windows,
            "macos" => Os::MacOs,
            "linux" => Os::Linux,
            _ => Os::Other,
        }
    }

    /// The concrete directory behind a path sentinel on this OS.
    ///
    /// Environment lookups happen here, at call time, so a change to e.g.
    /// `ALLUSERSPROFILE` after startup is observed by the next resolution.
    pub fn generic_path(self, label: GenericPath) -> PathBuf {
        match (self, label) {
            (Os::MacOs, GenericPath::UserLib) => {
                home().join("Library").join("Application Support")
            }
            (Os::MacOs, GenericPath::AllUsers) => PathBuf::from("/Library/Application Support"),
            (Os::Windows, GenericPath::UserLib) => home().join("AppData").join("Local"),
            (Os::Windows, GenericPath::AllUsers) => {
                PathBuf::from(std::env::var("ALLUSERSPROFILE").unwrap_or_default())
            }
            (_, GenericPath::UserLib) => home(),
            (_, GenericPath::AllUsers) => PathBuf::from("/usr/local/share"),
        }
    }
}

/// Sentinel path labels a cache-dir value may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericPath {
    /// Per-user application data.
    UserLib,
    /// Shared application data for all users.
    AllUsers,
}

impl GenericPath {
    /// Parse the literal sentinel component, e.g. `USERLIB` in
    /// `USERLIB/myapp/cache`.
    pub fn from_sentinel(component: &str) -> Option<GenericPath> {
        match component {
            "USERLIB" => Some(GenericPath::UserLib),
            "ALLUSERS" => Some(GenericPath::AllUsers),
            _ => None,
        }
    }
}

fn home() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_default()
}

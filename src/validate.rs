//! Per-option validation of raw input values.
//!
//! Validators run before anything is stored: a rejected value leaves the
//! option untouched and surfaces as [`ConfigError::InvalidValue`]
//! (see [`error`](crate::error)). Dispatch is a small tagged variant per
//! option rather than a trait hierarchy — the set of value categories is
//! closed.
//!
//! Raw input is `Option<&str>` because a matched bare flag carries no value
//! at all, which is not the same thing as an empty string for every
//! category: the boolean validator accepts both, the others reject both.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Permissive URL grammar: `scheme://rest` plus `mailto:` / `news:` forms.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((((https?|ftps?|gopher|telnet|nntp)://)|(mailto:|news:))(%[0-9A-Fa-f]{2}|[-()_.!~*';/?:@&=+$,A-Za-z0-9])+)([).!';/?:,][ \t])?$",
    )
    .expect("URL pattern compiles")
});

/// Validation strategy for one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Any present, non-blank (after trimming) string.
    Text,
    /// Flag-presence semantics: absent or blank means true, otherwise only
    /// case-insensitive `true` / `false` pass.
    Bool,
    /// A string matching the URL grammar.
    Url,
}

impl Validator {
    /// Decide whether `raw` is acceptable for this category.
    pub fn accepts(self, raw: Option<&str>) -> bool {
        match self {
            Validator::Text => raw.is_some_and(|s| !s.trim().is_empty()),
            Validator::Bool => match raw {
                None => true,
                Some(s) if s.trim().is_empty() => true,
                Some(s) => s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false"),
            },
            Validator::Url => raw.is_some_and(|s| !s.is_empty() && URL_PATTERN.is_match(s)),
        }
    }

    /// The value category this validator expects, for error reporting.
    pub fn expected(self) -> Expected {
        match self {
            Validator::Text => Expected::Text,
            Validator::Bool => Expected::Bool,
            Validator::Url => Expected::Url,
        }
    }
}

/// The kind of value an option expects, named in rejection errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Text,
    Bool,
    Url,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expected::Text => "a non-empty string",
            Expected::Bool => "a boolean",
            Expected::Url => "a URL",
        })
    }
}

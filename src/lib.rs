//! Layered option resolution for launcher applications.
//!
//! A launcher sits in front of the real application: it reads its own
//! settings, updates artifacts, then hands off. Launchcfg resolves the
//! launcher's fixed set of options from three layered sources and keeps
//! every token it does not recognize for verbatim replay to the launched
//! process.
//!
//! ```text
//! Compiled defaults     descriptor table, per option
//!        ↑ overridden by
//! Embedded resource     `launcher.toml` bundled next to the app
//!        ↑ overridden by
//! Command-line args     `--label` / `--label=value` tokens
//! ```
//!
//! Every layer is **sparse**: a source only touches the options it names,
//! and unset options fall through to the layer below. Precedence is purely
//! positional — the resource pass runs first, the argument pass second,
//! and the last write wins.
//!
//! # The option registry
//!
//! [`LauncherOption`] enumerates every known setting; each carries one
//! immutable [`Descriptor`] (label, match pattern, default, validator,
//! resolver). The table is the single schema for both sources: argument
//! tokens match the descriptor pattern, resource keys match the label.
//! Validation runs before anything is stored — a rejected value surfaces
//! as [`ConfigError`] naming the option, the offending value, and the
//! expected category, and leaves the option untouched.
//!
//! Boolean options use flag-presence semantics: `--offline` alone, an
//! absent value, or a blank one all mean `true`.
//!
//! # Overflow and downstream replay
//!
//! Tokens no descriptor claims are not errors — they belong to the
//! launched application. [`DownstreamArgs`] accumulates them across both
//! passes in presentation order; [`DownstreamArgs::args`] reconstructs the
//! argv to pass downstream, untouched. Resource pairs that match no label
//! are first normalized to the same `--key=value` token shape so overflow
//! looks uniform regardless of source.
//!
//! # Running the pipeline
//!
//! ```ignore
//! use launchcfg::{FileResourceFetcher, LauncherOption, run_pipeline};
//!
//! let fetcher = FileResourceFetcher::new(bundle_dir);
//! let (config, downstream) = run_pipeline(&fetcher, std::env::args().skip(1));
//!
//! if config.get(LauncherOption::Offline).as_deref() == Some("true") {
//!     // skip the update round-trip
//! }
//! std::process::Command::new(app_binary).args(downstream.args());
//! ```
//!
//! The store is an explicit context object — build as many independent
//! runs per process as you like (tests do). Provenance is tracked per
//! option ([`ConfigStore::provenance`]), so callers can ask which phase a
//! value came from, or [`ConfigStore::restore_defaults`] and ingest again.
//!
//! # Error handling
//!
//! The only synchronous error is a validation rejection at assignment
//! time, and it is scoped to that one option — ingestion of the remaining
//! tokens continues. A missing or malformed embedded resource is a normal
//! condition: logged, downgraded to "nothing to ingest," never fatal.
//! Diagnostics are emitted as [`tracing`] events; installing a subscriber
//! is the host application's choice.

pub mod error;
pub mod options;

mod ingest;
mod overflow;
mod platform;
mod resolve;
mod resource;
mod store;
mod validate;

pub use error::ConfigError;
pub use ingest::{ArgsIngester, Ingest, ResourceIngester, run_pipeline};
pub use options::{Descriptor, LauncherOption, MatchedValue};
pub use overflow::DownstreamArgs;
pub use platform::{GenericPath, Os};
pub use resolve::Resolver;
pub use resource::{FetchResource, FileResourceFetcher};
pub use store::{ConfigStore, Phase};
pub use validate::{Expected, Validator};

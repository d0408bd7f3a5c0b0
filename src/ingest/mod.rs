//! Ingestion strategies: turn one raw configuration source into option
//! assignments plus overflow tokens for the downstream process.
//!
//! Every strategy follows the same shape: walk its source's tokens, match
//! each against the descriptor table (first match in table order wins), and
//! on a match validate → resolve → store, stamping the strategy's phase as
//! provenance. Tokens nothing claims are the *leftovers*; the provided
//! [`Ingest::ingest`] merges them into the accumulator with
//! later-source-wins semantics, in presentation order.
//!
//! A validation rejection is scoped to its single token: it is logged and
//! the rest of the pass continues.

mod args;
mod props;

pub use args::ArgsIngester;
pub use props::ResourceIngester;

use tracing::warn;

use crate::options::LauncherOption;
use crate::overflow::DownstreamArgs;
use crate::resource::FetchResource;
use crate::store::{ConfigStore, Phase};

/// A source-specific ingestion strategy.
pub trait Ingest {
    /// The lifecycle phase stamped as provenance for this pass.
    fn phase(&self) -> Phase;

    /// Consume the source: store matched assignments into `store` and
    /// return the unmatched tokens in presentation order.
    fn collect(&self, store: &mut ConfigStore) -> Vec<String>;

    /// Run the pass and merge its leftovers into the accumulator.
    fn ingest(&self, store: &mut ConfigStore, downstream: &mut DownstreamArgs) {
        for token in self.collect(store) {
            downstream.merge_overwriting(&token);
        }
    }
}

/// One assignment attempt. A rejected value is logged and absorbed so the
/// rest of the current pass continues.
fn assign(store: &mut ConfigStore, option: LauncherOption, raw: Option<&str>, phase: Phase) {
    if let Err(err) = store.set(option, raw, phase) {
        warn!(%err, "ignoring rejected value");
    }
}

/// Run the full pipeline: the embedded resource first, then the argument
/// vector, so arguments override anything the resource set (last write
/// wins) and overflow keeps resource tokens ahead of argument tokens.
pub fn run_pipeline(
    fetcher: &dyn FetchResource,
    args: impl IntoIterator<Item = String>,
) -> (ConfigStore, DownstreamArgs) {
    let mut store = ConfigStore::new();
    let mut downstream = DownstreamArgs::new();

    ResourceIngester::new(fetcher).ingest(&mut store, &mut downstream);
    ArgsIngester::new(args).ingest(&mut store, &mut downstream);

    (store, downstream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LauncherOption::*;
    use crate::store::Phase;
    use std::fs;
    use tempfile::TempDir;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn fetcher_with(content: &str) -> (TempDir, crate::resource::FileResourceFetcher) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("launcher.toml"), content).unwrap();
        let fetcher = crate::resource::FileResourceFetcher::new(dir.path());
        (dir, fetcher)
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn arguments_override_resource_values() {
        let (_dir, fetcher) = fetcher_with("manifest-file = \"from-props.xml\"\n");

        let (store, _) = run_pipeline(&fetcher, args(&["--manifest-file=from-args.xml"]));

        assert_eq!(
            store.get(ManifestFile).as_deref(),
            Some("from-args.xml")
        );
        assert_eq!(store.provenance(ManifestFile), Phase::ParseCliArgs);
    }

    #[test]
    fn resource_value_survives_when_args_are_silent() {
        let (_dir, fetcher) = fetcher_with("manifest-file = \"from-props.xml\"\n");

        let (store, _) = run_pipeline(&fetcher, args(&["--offline"]));

        assert_eq!(
            store.get(ManifestFile).as_deref(),
            Some("from-props.xml")
        );
        assert_eq!(store.provenance(ManifestFile), Phase::LoadEmbeddedConfig);
        assert_eq!(store.get(Offline).as_deref(), Some("true"));
    }

    #[test]
    fn overflow_keeps_resource_tokens_before_argument_tokens() {
        let (_dir, fetcher) = fetcher_with("alpha = \"1\"\nbeta = \"2\"\n");

        let (_, downstream) = run_pipeline(&fetcher, args(&["--gamma=3", "delta"]));

        assert_eq!(
            downstream.raw(),
            ["--alpha=1", "--beta=2", "--gamma=3", "delta"]
        );
    }

    #[test]
    fn missing_resource_leaves_only_argument_ingestion() {
        let dir = TempDir::new().unwrap();
        let fetcher = crate::resource::FileResourceFetcher::new(dir.path());

        let (store, downstream) = run_pipeline(&fetcher, args(&["--headless", "positional"]));

        assert_eq!(store.get(Headless).as_deref(), Some("true"));
        assert_eq!(downstream.raw(), ["positional"]);
    }

    #[test]
    fn full_run_splits_known_from_overflow() {
        init_tracing();
        let (_dir, fetcher) = fetcher_with(
            "manifest-url = \"https://host/app.xml\"\ncustom-key = \"custom\"\n",
        );

        let (store, downstream) = run_pipeline(
            &fetcher,
            args(&["--offline", "--app-arg=7", "plain", "--cache-dir=ALLUSERS/app"]),
        );

        assert_eq!(
            store.get(ManifestUrl).as_deref(),
            Some("https://host/app.xml")
        );
        assert_eq!(store.get(Offline).as_deref(), Some("true"));
        assert!(store.get(CacheDir).unwrap().ends_with("app"));

        assert_eq!(downstream.raw(), ["--custom-key=custom", "--app-arg=7", "plain"]);
        assert_eq!(downstream.named()["app-arg"], "7");
        assert_eq!(downstream.unnamed(), ["plain"]);
    }
}

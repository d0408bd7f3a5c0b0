//! Command-line ingestion: match a flat token sequence against the
//! descriptor table.

use tracing::{debug, info};

use super::{Ingest, assign};
use crate::options::{LauncherOption, MatchedValue};
use crate::store::{ConfigStore, Phase};

/// Matches each element of an ordered token sequence (typically process
/// argv) independently against the option table. Unmatched elements are
/// forwarded verbatim.
pub struct ArgsIngester {
    args: Vec<String>,
}

impl ArgsIngester {
    pub fn new(args: impl IntoIterator<Item = String>) -> Self {
        Self {
            args: args.into_iter().collect(),
        }
    }
}

impl Ingest for ArgsIngester {
    fn phase(&self) -> Phase {
        Phase::ParseCliArgs
    }

    fn collect(&self, store: &mut ConfigStore) -> Vec<String> {
        info!(count = self.args.len(), "ingesting command-line arguments");

        let mut leftovers = Vec::new();
        for token in &self.args {
            match first_match(token) {
                Some((option, value)) => {
                    debug!(token = %token, option = option.label(), "matched argument");
                    assign(store, option, value, self.phase());
                }
                None => {
                    debug!(token = %token, "no matching option, forwarding downstream");
                    leftovers.push(token.clone());
                }
            }
        }
        leftovers
    }
}

/// The first descriptor in table order that matches `token`; table order is
/// the only tie-break.
fn first_match(token: &str) -> Option<(LauncherOption, MatchedValue<'_>)> {
    LauncherOption::ALL
        .into_iter()
        .find_map(|opt| opt.match_token(token).map(|value| (opt, value)))
}

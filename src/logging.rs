//! Logging setup for the cli-config CLI.
//!
//! Events go to stderr so stdout stays clean for `get`/`list` output.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_DIRECTIVE: &str = "cli_config=warn";

/// Initialize logging.
///
/// `RUST_LOG` is honoured when set. `--debug` raises the level to debug and
/// `--quiet` limits output to errors, regardless of the environment.
pub fn init_logging(debug: bool, quiet: bool) {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    if debug {
        filter = filter.add_directive(LevelFilter::DEBUG.into());
    } else if quiet {
        filter = EnvFilter::default().add_directive(LevelFilter::ERROR.into());
    }

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}

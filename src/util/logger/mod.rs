//! Logger setup
//!
//! Log lines go to stderr as `LEVEL message` so they never mix with program
//! output on stdout. The REPL is quiet by default (warnings only); `-v`
//! switches to debug, and `TIMEWARP_LOG` overrides both.
//!
//! ```rust
//! use timewarp::util::logger;
//!
//! logger::init_cli(false);
//! tracing::warn!("shown");
//! tracing::debug!("hidden unless verbose");
//! ```

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Environment variable naming a level (`error` .. `trace`)
pub const LOG_ENV: &str = "TIMEWARP_LOG";

/// Level for a CLI run: the `TIMEWARP_LOG` value if it names one, else
/// DEBUG when verbose and WARN otherwise
pub fn cli_level(
    verbose: bool,
    env_value: Option<&str>,
) -> Level {
    env_value
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(if verbose { Level::DEBUG } else { Level::WARN })
}

/// Install the stderr subscriber at `level`
///
/// Later calls are ignored once a global subscriber exists.
pub fn init_with_level(level: Level) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_filter(LevelFilter::from_level(level));

    let _ = Registry::default().with(layer).try_init();
}

/// Initialize logging for the `timewarp` binary
pub fn init_cli(verbose: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    init_with_level(cli_level(verbose, env_value.as_deref()));
}

//! Logger setup for the simulation binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default level used when `RUST_LOG` is unset.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence; otherwise [`default_level`] applies, so
/// `verbose` enables the per-tick debug output.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis().format_target(false);

    // A logger may already be installed when tests call `init` repeatedly.
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}

//! Logger setup shared by the binaries.

use log::LevelFilter;

/// Returns the default level: `Debug` if `verbose`, `Warn` otherwise.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { LevelFilter::Warn }
}

/// Initialises `env_logger` on stderr with `default_level(verbose)`. `RUST_LOG` overrides.
pub fn init(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(default_level(verbose))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

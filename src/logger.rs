//! Log output setup for the cicdgen binary.

use log::LevelFilter;

/// Installs the `env_logger` backend. `verbose` lowers the threshold to debug.
pub fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(verbose)
        .init();
}

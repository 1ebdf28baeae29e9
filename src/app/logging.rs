use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Install the global log subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug`, which
/// includes every line of subprocess output.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

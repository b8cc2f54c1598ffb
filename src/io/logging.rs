//! Tracing subscriber setup for the command-line binary

use tracing_subscriber::EnvFilter;

/// Default log directive for a `-v` count
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr formatter filtered by `RUST_LOG`, falling back to the
/// verbosity level
///
/// Installing twice is harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

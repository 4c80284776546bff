// CLI module
// Command-line interface, argument parsing and diagnostics setup

mod args;

pub use args::CliArgs;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// If parsing fails (missing `--period` or `--file`, unknown flags) or
/// `--help` is given, clap prints the usage and exits the process with a
/// non-zero status.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the diagnostics subscriber
///
/// Events go to stderr so stdout only carries the statement. The filter
/// comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

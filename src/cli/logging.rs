//! Log output for the clon binary

use tracing_subscriber::EnvFilter;

use super::CliError;

/// Environment variable holding the log filter, e.g. `CLON_LOG=clon_lang=trace`
pub const LOG_ENV: &str = "CLON_LOG";

/// Install a stderr `fmt` subscriber.
///
/// The filter comes from [`LOG_ENV`] when set, otherwise `debug` with
/// `verbose` and `warn` without.
pub fn init_logging(verbose: bool) -> Result<(), CliError> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

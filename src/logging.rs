use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "ALBUM_LOG";

/// Install the stderr log subscriber.
///
/// `ALBUM_LOG` wins when set; otherwise `-q` gives errors only, `-v` gives
/// debug output, and the default is warnings.
pub fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset, empty or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the diagnostics filter from `RUST_LOG`-style directives.
///
/// The directives replace the default entirely, so a global level such as
/// `debug` is honoured as well as target-scoped ones.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

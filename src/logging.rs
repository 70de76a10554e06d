use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a `tracing` filter; wins over settings.json.
pub const LOG_ENV: &str = "FOLIO_LOG";

const FALLBACK_FILTER: &str = "info";

/// Install the global subscriber.  Safe to call more than once; later calls
/// are ignored.
pub fn init(default_filter: &str) {
    let from_env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(from_env.as_deref(), default_filter);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Picks the first usable filter: `FOLIO_LOG`, then the configured default,
/// then `info`.  Empty or unparsable directives are skipped.
fn filter_directive<'a>(from_env: Option<&'a str>, default_filter: &'a str) -> &'a str {
    [from_env, Some(default_filter)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|d| !d.is_empty() && EnvFilter::try_new(d).is_ok())
        .unwrap_or(FALLBACK_FILTER)
}

//! Process bootstrap shared by the generator binaries.

use tracing_subscriber::EnvFilter;

pub mod metrics;

pub const DEFAULT_FILTER: &str = "info";

/// Filter from a `RUST_LOG`-style directive string, falling back to
/// [`DEFAULT_FILTER`] when absent or unparsable.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the fmt subscriber on stderr so stdout only carries readings.
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .try_init();
}

//! Tracing subscriber setup for slider hosts.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Quiet default: warnings everywhere, paging decisions from the core.
pub const DEFAULT_LOG_FILTER: &str = "warn,slider_core=debug";

/// Install a fmt subscriber. `RUST_LOG` wins over `fallback_filter`.
///
/// Returns an error if a global subscriber is already set.
pub fn init_tracing(fallback_filter: &str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

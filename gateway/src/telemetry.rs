use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::{Args, LogLevel};

/// Installs the global subscriber.
///
/// An explicit `--log` wins; otherwise `RUST_LOG` is honored, falling back to
/// the default level for the gateway crates.
pub(crate) fn init(args: &Args) -> anyhow::Result<()> {
    let env_filter = match args.log_level {
        Some(level) => EnvFilter::new(level.as_filter_str()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LogLevel::default().as_filter_str())),
    };

    tracing_subscriber::registry()
        .with(args.log_format())
        .with(env_filter)
        .try_init()?;

    Ok(())
}

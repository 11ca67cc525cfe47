use tracing_subscriber::EnvFilter;

use crate::config::{FolioConfig, LogFormat};

/// Install the global tracing subscriber. `RUST_LOG` wins over the
/// configured filter.
pub fn init(config: &FolioConfig) -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
}

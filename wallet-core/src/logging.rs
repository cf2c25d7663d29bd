// wallet-core/src/logging.rs
//
// Khởi tạo tracing subscriber cho binary. Library chỉ emit events, không tự
// cài subscriber.

use crate::config::LoggingConfig;
use anyhow::{anyhow, bail, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.level`. Output goes to stderr so stdout
/// stays machine-readable. Calling it again after a subscriber is set is
/// a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| anyhow!("invalid log level {:?}: {}", config.level, e))?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // Đã có subscriber (test, embedding) → bỏ qua
    let _ = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "text" => builder.try_init(),
        other => bail!("unknown log format {:?}", other),
    };

    Ok(())
}

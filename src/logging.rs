//=========================================================================
// Logging
//=========================================================================
//
// Installs `env_logger` behind the `log` facade used across the crate.
//
// Targets worth filtering on:
//   platform - window and frame pacing
//   alert    - alerts delivered by LogAlertSink
//
//=========================================================================

use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Filter used when neither the config nor `RUST_LOG` sets one.
///
/// Winit is noisy at `info` on some backends, so it is held at `warn`.
pub const DEFAULT_FILTER: &str = "info,winit=warn";

/// Logger setup for hosts and the demo.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter string, e.g. `"aetheric_views=debug,alert=info"`.
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

impl LoggingConfig {
    /// Coordinator lifecycle at `debug` (transitions, pre-spawn, alerts
    /// dropped on a full channel).
    pub fn verbose() -> Self {
        Self {
            env_filter: Some("debug,winit=warn".to_string()),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has an effect.
///
/// Filter: `config.env_filter`, else `RUST_LOG`, else [`DEFAULT_FILTER`].
/// If the host already installed a logger, that one is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(LevelFilter::Warn)
            .parse_filters(&filter)
            .write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("Logger installed (filter: {})", filter),
            Err(_) => log::debug!("Logger already installed, keeping it"),
        }
    });
}

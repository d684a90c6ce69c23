use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, Settings};

/// Install the global subscriber. Logs go to stderr so that stdout stays
/// free for reports and the interactive menu.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this when a
/// subscriber is already installed is a no-op.
pub fn init_logging(settings: &Settings) {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (json_layer, text_layer) = match settings.log_format {
        LogFormat::Json => (
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            ),
            None,
        ),
        LogFormat::Text => (
            None,
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(json_layer)
        .with(text_layer)
        .try_init();
}

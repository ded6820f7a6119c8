//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with the chat transcript on stdout.
//! The level comes from `RUST_LOG` and defaults to `info`.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LogFormat;
use crate::error::AppError;

const SERVICE_NAME: &str = "heritage-chat";

pub fn init_tracing(format: LogFormat) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);

            Registry::default().with(env_filter).with(fmt_layer).try_init()
        }
        LogFormat::Json => {
            let formatting_layer =
                BunyanFormattingLayer::new(SERVICE_NAME.to_string(), std::io::stderr);

            Registry::default()
                .with(env_filter)
                .with(JsonStorageLayer)
                .with(formatting_layer)
                .try_init()
        }
    };

    result.map_err(|e| AppError::Config(format!("Failed to set global subscriber: {}", e)))
}

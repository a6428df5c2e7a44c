//! Tracing initialization: console and optional log file share one fmt layer
//! with the full format (level, target, span, all fields).

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

/// Installs the global tracing subscriber.
///
/// The level comes from the RUST_LOG env var (default `info`). When
/// `log_file_path` is given the same output is also appended there via a
/// stdout/file tee. Load .env (e.g. `dotenvy::dotenv()`) before calling this,
/// otherwise a RUST_LOG set in the file will not apply.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    use tracing_subscriber::fmt::writer::MakeWriterExt;

    let fmt_layer = match log_file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = Arc::new(file);
            let writer = io::stdout.and(file);
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_file(false)
                .with_line_number(false)
                .boxed()
        }
        None => tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_level(true)
            .with_file(false)
            .with_line_number(false)
            .boxed(),
    };

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    tracing::info!(
        log_file = log_file_path.unwrap_or(""),
        "tracing initialized"
    );

    Ok(())
}

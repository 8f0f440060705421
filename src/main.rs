//! Betslip - a terminal betting slip for sports events.

use anyhow::Context;
use betslip::{App, Config, config};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to a daily file; the terminal belongs to the UI.
fn init_logging() -> anyhow::Result<WorkerGuard> {
    let log_dir = config::log_dir().context("Failed to resolve log directory")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, "betslip.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "betslip=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = init_logging()?;

    let config = Config::load_or_default().context("Failed to load configuration")?;

    let mut app = App::new(config)
        .await
        .context("Failed to initialize terminal")?;
    app.run().await.context("Application error")?;

    Ok(())
}

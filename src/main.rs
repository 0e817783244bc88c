use mhapa::{app::App, config::AppConfig, error::user_friendly_message, Result, LOG_DIR, LOG_FILE};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

/// Log to a file under the data directory; the terminal belongs to the TUI.
/// The returned guard flushes the writer when dropped.
fn init_logging() -> Result<WorkerGuard> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = AppConfig::data_dir()?.join(LOG_DIR);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mhapa=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_line_number(true)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging()?;
    info!("Starting {}", mhapa::APP_NAME);

    let mut app = App::new()?;
    app.init()?;

    let outcome = app.run().await;
    app.restore()?;

    if let Err(e) = outcome {
        error!("Application error: {}", e);
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }

    info!("Goodbye");
    Ok(())
}

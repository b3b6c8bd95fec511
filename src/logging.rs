use std::path::PathBuf;

pub const LOG_TARGET_STARTUP: &str = "quiz_feedback::startup";

/// Log directory in the user config folder
pub fn log_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("QuizFeedback").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize tracing with file rotation
///
/// Logs are written to `<config dir>/QuizFeedback/logs/quiz-feedback.YYYY-MM-DD.log`
/// with daily rotation. Debug builds also log to the console. `RUST_LOG`
/// overrides the default `info` filter.
pub fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = log_dir();

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "quiz-feedback.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!(target: LOG_TARGET_STARTUP, "Log directory: {}", log_dir.display());
}

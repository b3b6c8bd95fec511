use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use quiz_feedback::error::AppResult;
use quiz_feedback::logging::{initialize_tracing, LOG_TARGET_STARTUP};
use quiz_feedback::{Config, DirFetcher, FeedbackSystem, HttpFetcher, LogSurface};

fn main() {
    initialize_tracing();

    if let Err(e) = run() {
        tracing::error!("{:#}", e);
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn config_path_from_args() -> Option<PathBuf> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}

fn run() -> AppResult<()> {
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting quiz-feedback v{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH
    );

    let config = match config_path_from_args() {
        Some(path) => Config::load_from(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    let surface = Arc::new(LogSurface);
    let mut system = match &config.asset_root {
        Some(root) => {
            println!("Loading assets from {}", root.display());
            let fetcher = DirFetcher::new(root);
            FeedbackSystem::initialize(config.clone(), &fetcher, surface)
        }
        None => {
            println!("Loading assets from {}", config.base_url);
            let fetcher = HttpFetcher::new(
                config.base_url.clone(),
                Duration::from_millis(config.fetch_timeout_ms),
            );
            FeedbackSystem::initialize(config.clone(), &fetcher, surface)
        }
    };

    println!("===========================================");
    println!("  c = correct, w = wrong, k = click, q = quit");
    println!("===========================================");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        match line.trim() {
            "c" => {
                let outcome = system.correct();
                println!("✓ sound={:?} effect={:?}", outcome.sound, outcome.effect);
            }
            "w" => {
                let outcome = system.wrong();
                println!("✗ sound={:?} effect={:?}", outcome.sound, outcome.effect);
            }
            "k" => println!("click={:?}", system.play_click_sound()),
            "q" => break,
            "" => {}
            other => println!("Unknown command: {}", other),
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

//! `hamster` binary entry point.
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hamster_client::{Cli, ClientConfig, ErrorBody};
use runtime::Runtime;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::resolve(cli.data_dir.clone(), cli.log_dir.clone());

    let _guard = match setup_logging(config.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(error) => {
            eprintln!("failed to set up logging: {error:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config).await {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: ClientConfig) -> Result<ExitCode> {
    let runtime = Runtime::builder()
        .config(config.runtime)
        .build()
        .await
        .context("failed to start runtime")?;
    let handle = runtime.handle();

    let result = hamster_client::execute(&cli, &handle).await;

    drop(handle);
    runtime.shutdown().await.context("runtime shutdown failed")?;

    match result {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::warn!(kind = %error.kind(), "{error}");
            println!("{}", serde_json::to_string_pretty(&ErrorBody::from(&error))?);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Log to stderr, and to `<log_dir>/hamster.log` when a directory is given.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, "hamster.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/hamster.log", dir.display());
    }

    Ok(guard)
}

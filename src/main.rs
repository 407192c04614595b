mod app;
mod cli;
mod discovery;
mod launcher;
mod model;
mod msg;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::{Cli, Command};
use model::config::AppConfig;
use msg::Msg;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _guard = match init_logging() {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("nvim-locator: logging disabled: {err}");
            None
        }
    };

    match run(cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:?}");
            eprintln!("nvim-locator error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Vec<String>> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let mut app = App::new(&config);

    let msg = match cli.command {
        Command::List => Msg::ListInstallations,
        Command::Resolve { path } => Msg::Resolve(path),
        Command::Open { file, line, column } => {
            Msg::Open(cli::open_request(file.as_deref(), line, column))
        }
    };

    app.update(msg)
}

/// Logs go to a daily file in the data dir, never stdout.
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = directories::ProjectDirs::from("", "", "nvim-locator")
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "nvim-locator.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nvim_locator=info"));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    tracing::info!("nvim-locator starting");
    Ok(guard)
}

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use services::{AppServices, FileSource, PlainText};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use ui::{StudyScreen, StudyView, report_load_error};

mod command;
mod config;
mod terminal;

use command::{Command, HELP, parse_command};
use config::{AppConfig, Cli, prepare_sqlite_file};
use terminal::TerminalView;

const DEFAULT_LOG_FILTER: &str = "qbank=info,services=info,storage=warn";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(config: AppConfig) -> anyhow::Result<ExitCode> {
    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&config.db_url)?;
    let services = AppServices::new_sqlite(&config.db_url, &config.slot)
        .await
        .with_context(|| format!("failed to open {}", config.db_url))?;

    let mut view = TerminalView::new(io::stdout());
    let source = FileSource::new(&config.deck);
    let session = match services
        .open_session(&source, &PlainText, config.filter.clone())
        .await
    {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(deck = %config.deck.display(), error = %err, "load failed");
            report_load_error(&mut view, &err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut screen = StudyScreen::new(session, view);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                screen.view_mut().alert(&err.to_string());
                continue;
            }
        };

        match command {
            Command::Intent(intent) => screen.dispatch(intent).await?,
            Command::Stats => {
                let counts = screen.session().counts();
                screen.view_mut().print_stats(&counts);
            }
            Command::Help => screen.view_mut().print(HELP),
            Command::Quit => break,
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match AppConfig::from_cli(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    match run(config).await {
        Ok(code) => code,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}

//! podview binary entry point.

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, ConfigAction};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    // Off by default so logging never garbles the player screen; enable with
    // e.g. PODVIEW_LOG=podview=debug 2>podview.log
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PODVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            transcript,
            audio,
            speed,
            speakers,
        } => commands::play::handle_play(&transcript, audio, speed, speakers),
        Command::Info { transcript } => commands::info::handle_info(&transcript),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

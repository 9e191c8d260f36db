//! Soiree CLI Application
//!
//! Command-line client for planning events against the Soiree API.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use soiree_core::SoireeBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.client_config();
    let Args { no_color, command, .. } = args;

    let soiree = SoireeBuilder::new()
        .with_config(config)
        .logout_on_unauthorized(true)
        .build()
        .await
        .context("Failed to initialize client")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Soiree started against {}", soiree.api().api_root());

    let cli = Cli::new(soiree, renderer);
    match command {
        Some(Login(login)) => cli.login(&login).await,
        Some(Register(register)) => cli.register(&register).await,
        Some(Logout) => cli.logout(),
        Some(Artists { command }) => cli.handle_artist_command(command).await,
        Some(Event { command }) => cli.handle_event_command(command).await,
        Some(Whoami) | None => cli.whoami().await,
    }
}

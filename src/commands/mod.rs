pub mod chart;
pub mod clear;
pub mod export;
pub mod import;
pub mod init;
pub mod notes;
pub mod start;
pub mod status;

use crate::db::preferences::SqliteStore;
use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::rollover::RolloverOutcome;
use crate::libs::session::SessionEngine;
use crate::msg_info;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start a study session; press Enter to stop it")]
    Start,
    #[command(about = "Show today's and this week's stats")]
    Status,
    #[command(about = "Show the weekly study time chart")]
    Chart,
    #[command(about = "Clear today's stats, or everything with --weekly")]
    Clear(clear::ClearArgs),
    #[command(about = "Save today's stats to a report file")]
    Export(export::ExportArgs),
    #[command(about = "Load stats from a report file", arg_required_else_help = true)]
    Import(import::ImportArgs),
    #[command(about = "Show or edit notes")]
    Notes(notes::NotesArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start => start::cmd().await,
            Commands::Status => status::cmd(),
            Commands::Chart => chart::cmd(),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Notes(args) => notes::cmd(args),
        }
    }
}

/// Opens the on-disk store and activates the engine, which runs the weekly rollover.
pub(crate) fn open_engine(config: &Config) -> Result<SessionEngine<SqliteStore, SystemClock>> {
    let mut engine = SessionEngine::new(SqliteStore::new()?, SystemClock)
        .with_first_day(config.first_day_of_week)
        .with_tick_period(config.tick_period());

    if engine.activate()? == RolloverOutcome::Reset {
        msg_info!(Message::WeeklyStatsReset);
    }
    Ok(engine)
}

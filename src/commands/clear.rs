use super::open_engine;
use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Clear all stats including the weekly history (notes and the report path are kept)
    #[arg(long)]
    weekly: bool,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs) -> Result<()> {
    let config = Config::read()?;
    let mut engine = open_engine(&config)?;

    if !args.weekly {
        engine.clear_daily()?;
        msg_success!(Message::DailyStatsCleared);
        return Ok(());
    }

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearWeekly.to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::ClearWeeklyCancelled);
        return Ok(());
    }

    engine.clear_weekly()?;
    msg_success!(Message::WeeklyStatsCleared);
    Ok(())
}

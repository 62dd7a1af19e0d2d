use super::open_engine;
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let engine = open_engine(&config)?;

    let daily = engine.daily_stats()?;
    msg_print!(Message::StatsHeader(daily.date.format("%Y-%m-%d").to_string()), true);
    View::stats(&daily, &engine.weekly_stats()?, config.language);
    Ok(())
}

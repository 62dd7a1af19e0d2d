use super::open_engine;
use crate::{
    libs::{chart::WeeklyChart, config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let engine = open_engine(&config)?;

    let chart = WeeklyChart::from_weekly(&engine.weekly_stats()?, config.language);
    msg_print!(Message::WeeklyChartHeader, true);
    View::chart(&chart);
    Ok(())
}

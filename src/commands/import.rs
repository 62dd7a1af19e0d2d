use super::open_engine;
use crate::{
    libs::{config::Config, messages::Message, report, stats::clear_weekday_totals, view::View},
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Report file to load, normally named YYYY-MM-DD.txt
    path: PathBuf,
    /// Do not rebuild the weekly chart from sibling report files
    #[arg(long)]
    no_history: bool,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let config = Config::read()?;
    let mut engine = open_engine(&config)?;
    let today = engine.today();

    report::import(&args.path, engine.store_mut()?, today)?;
    msg_success!(Message::ReportImported(args.path.display().to_string()));

    if !args.no_history {
        match report::report_date(&args.path) {
            Some(selected) => {
                let dir = args.path.parent().filter(|dir| !dir.as_os_str().is_empty()).unwrap_or(Path::new("."));
                let store = engine.store_mut()?;
                clear_weekday_totals(store)?;
                let history = report::import_weekly_history(dir, selected, store)?;
                for failure in &history.errors {
                    msg_error!(Message::HistoryFileFailed(failure.path.display().to_string(), failure.error.to_string()));
                }
                msg_info!(Message::HistoryLoaded(history.loaded.len()));
            }
            None => msg_warning!(Message::HistorySkippedNoDate(args.path.display().to_string())),
        }
    }

    View::stats(&engine.daily_stats()?, &engine.weekly_stats()?, config.language);
    Ok(())
}

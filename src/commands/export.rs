use super::open_engine;
use crate::{
    libs::{config::Config, messages::Message, report, store::keys, store::StatsStore},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Report file to write; defaults to YYYY-MM-DD.txt in the reports directory
    path: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let mut engine = open_engine(&config)?;
    let today = engine.today();

    let path = match args.path {
        Some(path) => path,
        None => {
            let saved = engine.store().get(keys::SAVED_DATA_PATH, "")?;
            config.export_dir(&saved).join(report::default_file_name(today))
        }
    };

    report::export(engine.store_mut()?, &path, today, config.language)?;
    msg_success!(Message::ReportExported(path.display().to_string()));
    Ok(())
}

use super::open_engine;
use crate::{
    libs::{config::Config, messages::Message, store::keys, store::StatsStore},
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

const DEFAULT_NOTES: &str = "add some text...";

#[derive(Debug, Args)]
pub struct NotesArgs {
    /// New notes text; prints the current notes when omitted
    text: Option<String>,
    /// Remove the notes
    #[arg(long, conflicts_with = "text")]
    clear: bool,
}

pub fn cmd(args: NotesArgs) -> Result<()> {
    let config = Config::read()?;
    let mut engine = open_engine(&config)?;

    if args.clear {
        engine.store_mut()?.remove(keys::NOTES)?;
        msg_success!(Message::NotesCleared);
        return Ok(());
    }

    match args.text {
        Some(text) => {
            engine.store_mut()?.put(keys::NOTES, &text)?;
            msg_success!(Message::NotesSaved);
        }
        None => {
            msg_print!(engine.store().get(keys::NOTES, DEFAULT_NOTES)?);
        }
    }
    Ok(())
}

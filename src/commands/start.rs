use super::open_engine;
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use std::io::{self, Write};
use tokio::sync::oneshot;

/// Runs one session in the foreground. Enter or Ctrl-C stops and records it.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut engine = open_engine(&config)?;

    let started_at = engine.start()?;
    msg_info!(Message::SessionStarted(started_at.format("%H:%M:%S %p").to_string()));
    msg_print!(Message::SessionPressEnterToStop);

    // A plain thread, so a pending stdin read never holds up runtime shutdown.
    let (enter_tx, mut enter_rx) = oneshot::channel();
    std::thread::spawn(move || {
        let mut line = String::new();
        let _ = io::stdin().read_line(&mut line);
        let _ = enter_tx.send(());
    });

    let mut elapsed = engine.subscribe_elapsed();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            changed = elapsed.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = elapsed.borrow_and_update().humanize();
                print!("{}", View::elapsed_line(&current, config.language));
                let _ = io::stdout().flush();
            }
            _ = &mut enter_rx => break,
            _ = &mut ctrl_c => {
                println!();
                msg_info!(Message::SessionInterrupted);
                break;
            }
        }
    }
    println!();

    let record = match engine.stop() {
        Ok(record) => record,
        Err(e) => {
            if let Some(started_at) = engine.shutdown() {
                msg_warning!(Message::SessionDiscarded(started_at.format("%H:%M:%S").to_string()));
            }
            return Err(e.into());
        }
    };

    if record.clock_anomaly {
        msg_warning!(Message::SessionClockAnomaly);
    }

    View::session(&record, config.language);
    msg_success!(Message::SessionRecorded(record.duration.humanize()));
    View::stats(&engine.daily_stats()?, &engine.weekly_stats()?, config.language);
    Ok(())
}

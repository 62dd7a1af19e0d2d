//! Display implementation for studylog messages.
//!
//! All user-facing CLI text lives here, so wording stays consistent and
//! there is a single place to touch when a message changes. Report labels
//! and chart captions are localized separately in
//! [`crate::libs::language`]; these messages are English only.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === SESSION MESSAGES ===
            Message::SessionStarted(time) => format!("Session started at {}", time),
            Message::SessionRecorded(duration) => format!("Session recorded: {}", duration),
            Message::SessionPressEnterToStop => "Press Enter (or Ctrl-C) to stop the session".to_string(),
            Message::SessionInterrupted => "Interrupted, stopping the session".to_string(),
            Message::SessionClockAnomaly => "The system clock moved backwards during the session; it was recorded as 0s".to_string(),
            Message::SessionDiscarded(time) => format!("Unfinished session started at {} was discarded", time),

            // === STATS MESSAGES ===
            Message::StatsHeader(date) => format!("Study stats for {}", date),
            Message::DailyStatsCleared => "Today's stats cleared".to_string(),
            Message::WeeklyStatsCleared => "All weekly stats cleared".to_string(),
            Message::ConfirmClearWeekly => "Clear all stats, including the weekly history?".to_string(),
            Message::ClearWeeklyCancelled => "Nothing was cleared".to_string(),
            Message::WeeklyStatsReset => "New week started, weekly stats reset".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportExported(path) => format!("Report saved to {}", path),
            Message::ReportImported(path) => format!("Report loaded from {}", path),
            Message::HistoryLoaded(count) => format!("Weekly history rebuilt from {} report(s)", count),
            Message::HistoryFileFailed(path, error) => format!("Could not load {}: {}", path, error),
            Message::HistorySkippedNoDate(path) => format!("{} is not named after a date, weekly history not loaded", path),
            Message::WeeklyChartHeader => "Study time this week".to_string(),

            // === NOTES MESSAGES ===
            Message::NotesSaved => "Notes saved".to_string(),
            Message::NotesCleared => "Notes cleared".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file found".to_string(),
            Message::PromptLanguage => "Report language".to_string(),
            Message::PromptFirstDayOfWeek => "First day of the week".to_string(),
            Message::PromptReportsDir => "Default directory for reports (empty for none)".to_string(),
        };
        write!(f, "{}", s)
    }
}

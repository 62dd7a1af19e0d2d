#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SessionStarted(String),  // start time
    SessionRecorded(String), // humanized duration
    SessionPressEnterToStop,
    SessionInterrupted,
    SessionClockAnomaly,
    SessionDiscarded(String), // start time

    // === STATS MESSAGES ===
    StatsHeader(String), // date
    DailyStatsCleared,
    WeeklyStatsCleared,
    ConfirmClearWeekly,
    ClearWeeklyCancelled,
    WeeklyStatsReset,

    // === REPORT MESSAGES ===
    ReportExported(String), // path
    ReportImported(String), // path
    HistoryLoaded(usize),
    HistoryFileFailed(String, String), // path, error
    HistorySkippedNoDate(String),      // path
    WeeklyChartHeader,

    // === NOTES MESSAGES ===
    NotesSaved,
    NotesCleared,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    PromptLanguage,
    PromptFirstDayOfWeek,
    PromptReportsDir,
}

//! Plain-text daily report files: export, import and weekly history scan.
//!
//! A report is five lines, each a localized label followed by a value:
//!
//! ```text
//! Number of sessions: 3
//! Last session: PT1M30S
//! Longest session: PT5M
//! Total study time today: PT10M
//! Total study time this week: PT30M
//! ```
//!
//! Reports are named after the date they describe (`2024-01-03.txt`), which
//! is what lets [`import_weekly_history`] rebuild the weekly chart from a
//! directory of them.

use crate::libs::duration::StudyDuration;
use crate::libs::error::{Result, StudyError};
use crate::libs::language::{Language, ReportField};
use crate::libs::stats::{read_duration, DailyStats, StatsUpdate};
use crate::libs::store::{keys, StatsStore};
use chrono::{Datelike, NaiveDate, Weekday};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const REPORT_EXTENSION: &str = "txt";

/// File name used for the report of `date`.
pub fn default_file_name(date: NaiveDate) -> String {
    format!("{}.{}", date.format("%Y-%m-%d"), REPORT_EXTENSION)
}

/// Parses the date a report file is named after, if any.
pub fn report_date(path: &Path) -> Option<NaiveDate> {
    let extension = path.extension()?.to_str()?;
    if !extension.eq_ignore_ascii_case(REPORT_EXTENSION) {
        return None;
    }
    NaiveDate::parse_from_str(path.file_stem()?.to_str()?, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sessions: u32,
    pub last_session: StudyDuration,
    pub longest_session: StudyDuration,
    pub total_today: StudyDuration,
    pub total_this_week: StudyDuration,
}

impl Report {
    pub fn from_store<S: StatsStore + ?Sized>(store: &S, date: NaiveDate) -> Result<Self> {
        let daily = DailyStats::load(store, date)?;
        Ok(Report {
            sessions: daily.sessions,
            last_session: daily.last_session,
            longest_session: daily.longest_session,
            total_today: daily.total_today,
            total_this_week: read_duration(store, keys::TOTAL_THIS_WEEK)?,
        })
    }

    pub fn render(&self, language: Language) -> String {
        let mut text = String::new();
        for field in ReportField::ALL {
            text.push_str(language.label(field));
            text.push_str(&self.value(field));
            text.push('\n');
        }
        text
    }

    fn value(&self, field: ReportField) -> String {
        match field {
            ReportField::Sessions => self.sessions.to_string(),
            ReportField::LastSession => self.last_session.format(),
            ReportField::LongestSession => self.longest_session.format(),
            ReportField::TotalToday => self.total_today.format(),
            ReportField::TotalThisWeek => self.total_this_week.format(),
        }
    }

    /// Parses report text. The value of each line is whatever follows its
    /// first `':'`, trimmed; the label itself is not checked, so reports in
    /// any language are accepted. Lines past the fifth are ignored.
    ///
    /// Every malformed field is listed in the returned error.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let values: Vec<&str> = text
            .lines()
            .take(ReportField::ALL.len())
            .map(|line| line.split_once(':').map_or(line, |(_, value)| value).trim())
            .collect();

        if values.len() < ReportField::ALL.len() {
            return Err(StudyError::MalformedReport {
                path: path.to_path_buf(),
                reason: format!("expected {} lines, found {}", ReportField::ALL.len(), values.len()),
            });
        }

        let mut problems = Vec::new();

        let sessions = match values[0].parse::<u32>() {
            Ok(sessions) => sessions,
            Err(e) => {
                problems.push(format!("{}: '{}' ({})", ReportField::Sessions.name(), values[0], e));
                0
            }
        };

        let mut durations = [StudyDuration::ZERO; 4];
        for (slot, (field, value)) in durations.iter_mut().zip(ReportField::ALL[1..].iter().zip(&values[1..])) {
            match StudyDuration::parse(value) {
                Ok(duration) => *slot = duration,
                Err(e) => problems.push(format!("{}: {}", field.name(), e)),
            }
        }

        if !problems.is_empty() {
            return Err(StudyError::MalformedReport {
                path: path.to_path_buf(),
                reason: problems.join("; "),
            });
        }

        let [last_session, longest_session, total_today, total_this_week] = durations;
        Ok(Report {
            sessions,
            last_session,
            longest_session,
            total_today,
            total_this_week,
        })
    }
}

/// Writes the stats of `date` to `path`, overwriting it, and remembers the
/// path under `saved_data_path`.
pub fn export<S: StatsStore + ?Sized>(store: &mut S, path: &Path, date: NaiveDate, language: Language) -> Result<Report> {
    let report = Report::from_store(store, date)?;
    fs::write(path, report.render(language)).map_err(|e| StudyError::io(path, e))?;
    remember_path(store, path)?;
    debug!(path = %path.display(), "report exported");
    Ok(report)
}

/// Reads a report and folds it into the stats of `date`.
///
/// The session count, last session, today and week totals are overwritten
/// with the file's values. The longest session goes through the same
/// keep-the-larger rule as a stopped session, with the imported total for
/// the day as the candidate; the file's own longest-session field is
/// validated but does not feed the stored value.
///
/// Nothing is written if any field is malformed.
pub fn import<S: StatsStore + ?Sized>(path: &Path, store: &mut S, date: NaiveDate) -> Result<Report> {
    let text = fs::read_to_string(path).map_err(|e| StudyError::io(path, e))?;
    let report = Report::parse(&text, path)?;

    StatsUpdate {
        today_total: report.total_today,
        week_total: report.total_this_week,
        sessions: report.sessions,
        last: report.last_session,
        longest_candidate: report.total_today,
    }
    .apply(store, date)?;

    remember_path(store, path)?;
    debug!(path = %path.display(), "report imported");
    Ok(report)
}

fn remember_path<S: StatsStore + ?Sized>(store: &mut S, path: &Path) -> Result<()> {
    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    store.put(keys::SAVED_DATA_PATH, &absolute.to_string_lossy())
}

/// One weekday total recovered from a report file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub total_today: StudyDuration,
}

#[derive(Debug)]
pub struct HistoryError {
    pub path: PathBuf,
    pub error: StudyError,
}

#[derive(Debug, Default)]
pub struct HistoryImport {
    pub loaded: Vec<HistoryEntry>,
    pub errors: Vec<HistoryError>,
}

/// Rebuilds per-weekday totals from the date-named reports in `dir`.
///
/// Only reports whose weekday is not later in the week than `selected`'s
/// weekday are applied, so the result is the week up to the selected day.
/// Files are processed in name order; when two reports share a weekday the
/// later date wins. A file that cannot be read or parsed is recorded in
/// [`HistoryImport::errors`] and the scan moves on. Files whose name is not
/// a date are skipped.
pub fn import_weekly_history<S: StatsStore + ?Sized>(dir: &Path, selected: NaiveDate, store: &mut S) -> Result<HistoryImport> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| StudyError::io(dir, e))? {
        let entry = entry.map_err(|e| StudyError::io(dir, e))?;
        paths.push(entry.path());
    }
    paths.sort();

    let limit = selected.weekday().number_from_monday();
    let mut result = HistoryImport::default();

    for path in paths {
        let Some(date) = report_date(&path) else {
            debug!(path = %path.display(), "skipping file without a date name");
            continue;
        };
        if date.weekday().number_from_monday() > limit {
            continue;
        }

        match read_total_today(&path) {
            Ok(total_today) => {
                store.put(keys::weekday(date.weekday()), &total_today.format())?;
                result.loaded.push(HistoryEntry {
                    date,
                    weekday: date.weekday(),
                    total_today,
                });
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping report");
                result.errors.push(HistoryError { path, error });
            }
        }
    }

    Ok(result)
}

fn read_total_today(path: &Path) -> Result<StudyDuration> {
    let text = fs::read_to_string(path).map_err(|e| StudyError::io(path, e))?;
    let value = text
        .lines()
        .find_map(|line| {
            Language::ALL
                .iter()
                .find_map(|language| line.strip_prefix(language.label(ReportField::TotalToday)))
        })
        .ok_or_else(|| StudyError::MalformedReport {
            path: path.to_path_buf(),
            reason: format!("no '{}' line", ReportField::TotalToday.name()),
        })?;

    StudyDuration::parse(value.trim()).map_err(|e| StudyError::MalformedReport {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

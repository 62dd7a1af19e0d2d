//! Daily and weekly aggregates read from, and folded into, a [`StatsStore`].

use crate::libs::duration::StudyDuration;
use crate::libs::error::Result;
use crate::libs::store::{keys, StatsStore};
use chrono::{Datelike, NaiveDate, Weekday};

const ZERO_TEXT: &str = "PT0S";

/// Reads a duration key, treating a missing or empty value as zero.
pub fn read_duration<S: StatsStore + ?Sized>(store: &S, key: &str) -> Result<StudyDuration> {
    let text = store.get(key, ZERO_TEXT)?;
    if text.trim().is_empty() {
        return Ok(StudyDuration::ZERO);
    }
    StudyDuration::parse(text.trim())
}

/// Aggregate for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub sessions: u32,
    pub last_session: StudyDuration,
    pub longest_session: StudyDuration,
    pub total_today: StudyDuration,
}

impl DailyStats {
    pub fn load<S: StatsStore + ?Sized>(store: &S, date: NaiveDate) -> Result<Self> {
        let sessions = store.get_int(&keys::dated(keys::SESSIONS, date), 0)?;
        Ok(DailyStats {
            date,
            sessions: u32::try_from(sessions).unwrap_or(0),
            last_session: read_duration(store, &keys::dated(keys::LAST_SESSION, date))?,
            longest_session: read_duration(store, &keys::dated(keys::LONGEST_SESSION, date))?,
            total_today: read_duration(store, &keys::dated(keys::TOTAL_TODAY, date))?,
        })
    }

    /// Zeroes the four date-scoped values for `date`.
    pub fn clear<S: StatsStore + ?Sized>(store: &mut S, date: NaiveDate) -> Result<()> {
        store.put_all(&[
            (keys::dated(keys::SESSIONS, date), "0".to_string()),
            (keys::dated(keys::LAST_SESSION, date), ZERO_TEXT.to_string()),
            (keys::dated(keys::LONGEST_SESSION, date), ZERO_TEXT.to_string()),
            (keys::dated(keys::TOTAL_TODAY, date), ZERO_TEXT.to_string()),
        ])
    }
}

/// Week-level aggregate: running total, per-weekday totals and the rollover flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyStats {
    pub total_this_week: StudyDuration,
    /// Indexed Monday (0) .. Sunday (6).
    pub per_day: [StudyDuration; 7],
    pub reset_pending: bool,
}

impl WeeklyStats {
    pub fn load<S: StatsStore + ?Sized>(store: &S) -> Result<Self> {
        let mut per_day = [StudyDuration::ZERO; 7];
        for day in keys::WEEKDAYS {
            per_day[day.num_days_from_monday() as usize] = read_duration(store, keys::weekday(day))?;
        }
        Ok(WeeklyStats {
            total_this_week: read_duration(store, keys::TOTAL_THIS_WEEK)?,
            per_day,
            reset_pending: store.get_bool(keys::WEEK_RESET, true)?,
        })
    }

    pub fn day(&self, day: Weekday) -> StudyDuration {
        self.per_day[day.num_days_from_monday() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, StudyDuration)> + '_ {
        keys::WEEKDAYS.iter().map(move |day| (*day, self.day(*day)))
    }

    pub fn busiest_day(&self) -> StudyDuration {
        self.per_day.iter().copied().max().unwrap_or_default()
    }
}

/// Zeroes the seven per-weekday totals.
pub fn clear_weekday_totals<S: StatsStore + ?Sized>(store: &mut S) -> Result<()> {
    let entries: Vec<(String, String)> = keys::WEEKDAYS
        .iter()
        .map(|day| (keys::weekday(*day).to_string(), ZERO_TEXT.to_string()))
        .collect();
    store.put_all(&entries)
}

/// The values written back after a session stops or a report is imported.
///
/// `last` is stored as given; the stored longest becomes the larger of the
/// current stored longest and `longest_candidate`. The weekday slot of `date`
/// receives `today_total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsUpdate {
    pub today_total: StudyDuration,
    pub week_total: StudyDuration,
    pub sessions: u32,
    pub last: StudyDuration,
    pub longest_candidate: StudyDuration,
}

impl StatsUpdate {
    /// Writes the update for `date`, returning the resulting longest session.
    pub fn apply<S: StatsStore + ?Sized>(&self, store: &mut S, date: NaiveDate) -> Result<StudyDuration> {
        let current_longest = read_duration(store, &keys::dated(keys::LONGEST_SESSION, date))?;
        let longest = current_longest.max(self.longest_candidate);

        store.put_all(&[
            (keys::dated(keys::TOTAL_TODAY, date), self.today_total.format()),
            (keys::TOTAL_THIS_WEEK.to_string(), self.week_total.format()),
            (keys::dated(keys::SESSIONS, date), self.sessions.to_string()),
            (keys::dated(keys::LONGEST_SESSION, date), longest.format()),
            (keys::dated(keys::LAST_SESSION, date), self.last.format()),
            (keys::weekday(date.weekday()).to_string(), self.today_total.format()),
        ])?;

        Ok(longest)
    }
}

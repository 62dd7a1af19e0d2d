//! Date-driven weekly reset.
//!
//! The `week_reset` flag is the whole state: `true` means a reset is pending
//! (armed), `false` means it already fired. On the first day of the week an
//! armed flag fires the reset and disarms; on any other day the flag is armed
//! again. Activating several times on the reset day therefore resets once,
//! and the next first-day-of-week finds the flag re-armed, provided the
//! tracker was activated at least once on another day in between.

use crate::libs::duration::StudyDuration;
use crate::libs::error::Result;
use crate::libs::store::{keys, StatsStore};
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloverState {
    PendingReset,
    ResetDone,
}

impl RolloverState {
    pub fn load<S: StatsStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(if store.get_bool(keys::WEEK_RESET, true)? {
            RolloverState::PendingReset
        } else {
            RolloverState::ResetDone
        })
    }

    fn store<S: StatsStore + ?Sized>(self, store: &mut S) -> Result<()> {
        store.put_bool(keys::WEEK_RESET, self == RolloverState::PendingReset)
    }
}

/// What an activation did to the weekly stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloverOutcome {
    /// First day of the week, flag was armed: weekly totals zeroed.
    Reset,
    /// First day of the week, reset already fired.
    AlreadyReset,
    /// Any other day: flag (re-)armed.
    Armed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyRollover {
    first_day: Weekday,
}

impl Default for WeeklyRollover {
    fn default() -> Self {
        WeeklyRollover { first_day: Weekday::Mon }
    }
}

impl WeeklyRollover {
    pub fn new(first_day: Weekday) -> Self {
        WeeklyRollover { first_day }
    }

    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    pub fn apply<S: StatsStore + ?Sized>(&self, store: &mut S, today: NaiveDate) -> Result<RolloverOutcome> {
        if today.weekday() != self.first_day {
            RolloverState::PendingReset.store(store)?;
            return Ok(RolloverOutcome::Armed);
        }

        if RolloverState::load(store)? == RolloverState::ResetDone {
            return Ok(RolloverOutcome::AlreadyReset);
        }

        let zero = StudyDuration::ZERO.format();
        let mut entries = vec![
            (keys::TOTAL_THIS_WEEK.to_string(), zero.clone()),
            (keys::dated(keys::TOTAL_TODAY, today), zero.clone()),
        ];
        entries.extend(keys::WEEKDAYS.iter().map(|day| (keys::weekday(*day).to_string(), zero.clone())));
        entries.push((keys::WEEK_RESET.to_string(), "false".to_string()));
        store.put_all(&entries)?;

        info!(%today, "weekly stats reset");
        Ok(RolloverOutcome::Reset)
    }
}

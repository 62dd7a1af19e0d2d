//! Session engine: the start/stop state machine and stats accumulation.
//!
//! The engine is `Idle` until [`SessionEngine::start`] captures a start time
//! and spawns a one-second display tick; [`SessionEngine::stop`] captures the
//! end time, folds the session into the store and returns to `Idle`. Nothing
//! is persisted while a session runs.
//!
//! ## Usage
//!
//! ```rust
//! use studylog::libs::clock::SystemClock;
//! use studylog::libs::session::SessionEngine;
//! use studylog::libs::store::MemoryStore;
//!
//! let mut engine = SessionEngine::new(MemoryStore::new(), SystemClock);
//! engine.activate()?;
//! engine.start()?;
//! let record = engine.stop()?;
//! assert_eq!(engine.daily_stats()?.sessions, 1);
//! assert_eq!(engine.daily_stats()?.last_session, record.duration);
//! # Ok::<(), studylog::libs::error::StudyError>(())
//! ```

use crate::libs::clock::Clock;
use crate::libs::duration::StudyDuration;
use crate::libs::error::{Result, StudyError};
use crate::libs::rollover::{RolloverOutcome, WeeklyRollover};
use crate::libs::stats::{read_duration, DailyStats, StatsUpdate, WeeklyStats};
use crate::libs::store::{keys, StatsStore};
use crate::libs::ticker::Ticker;
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Running => write!(f, "running"),
        }
    }
}

/// One completed start/stop cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
    pub duration: StudyDuration,
    /// The wall clock went backwards during the session; `duration` was clamped to zero.
    pub clock_anomaly: bool,
}

enum Phase {
    Idle,
    Running { started_at: NaiveDateTime, ticker: Ticker },
}

pub struct SessionEngine<S: StatsStore, C: Clock> {
    store: S,
    clock: C,
    rollover: WeeklyRollover,
    /// Date the rollover last ran for; `None` until [`SessionEngine::activate`].
    activated_on: Option<NaiveDate>,
    tick_period: Duration,
    phase: Phase,
    elapsed: Arc<watch::Sender<StudyDuration>>,
}

impl<S: StatsStore, C: Clock> SessionEngine<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        let (elapsed, _) = watch::channel(StudyDuration::ZERO);
        SessionEngine {
            store,
            clock,
            rollover: WeeklyRollover::default(),
            activated_on: None,
            tick_period: DEFAULT_TICK_PERIOD,
            phase: Phase::Idle,
            elapsed: Arc::new(elapsed),
        }
    }

    pub fn with_first_day(mut self, first_day: Weekday) -> Self {
        self.rollover = WeeklyRollover::new(first_day);
        self
    }

    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Runs the weekly rollover for the current date.
    pub fn activate(&mut self) -> Result<RolloverOutcome> {
        let today = self.today();
        let outcome = self.rollover.apply(&mut self.store, today)?;
        self.activated_on = Some(today);
        debug!(%today, ?outcome, "engine activated");
        Ok(outcome)
    }

    /// Runs the rollover for `date` if the engine was activated on an
    /// earlier day, so a session crossing midnight lands in the right week.
    fn catch_up_rollover(&mut self, date: NaiveDate) -> Result<()> {
        match self.activated_on {
            Some(activated_on) if activated_on != date => {
                let outcome = self.rollover.apply(&mut self.store, date)?;
                self.activated_on = Some(date);
                debug!(%date, ?outcome, "rollover caught up after date change");
            }
            _ => {}
        }
        Ok(())
    }

    pub fn start(&mut self) -> Result<NaiveDateTime> {
        if let Phase::Running { .. } = self.phase {
            return Err(self.invalid("start"));
        }

        let started_at = self.clock.now();
        self.elapsed.send_replace(StudyDuration::ZERO);

        let clock = self.clock.clone();
        let elapsed = Arc::clone(&self.elapsed);
        let ticker = Ticker::spawn(self.tick_period, move || {
            let current = StudyDuration::between(started_at, clock.now()).unwrap_or_default();
            elapsed.send_replace(current);
        });

        self.phase = Phase::Running { started_at, ticker };
        debug!(%started_at, "session started");
        Ok(started_at)
    }

    /// Ends the running session and folds it into the stats.
    ///
    /// If writing to the store fails the session keeps running, so the
    /// caller can retry.
    pub fn stop(&mut self) -> Result<SessionRecord> {
        let started_at = match &self.phase {
            Phase::Running { started_at, .. } => *started_at,
            Phase::Idle => return Err(self.invalid("stop")),
        };

        let ended_at = self.clock.now();
        let (duration, clock_anomaly) = match StudyDuration::between(started_at, ended_at) {
            Some(duration) => (duration, false),
            None => {
                warn!(%started_at, %ended_at, "clock moved backwards during session, clamping to zero");
                (StudyDuration::ZERO, true)
            }
        };

        self.catch_up_rollover(ended_at.date())?;
        self.fold(ended_at.date(), duration)?;

        if let Phase::Running { mut ticker, .. } = std::mem::replace(&mut self.phase, Phase::Idle) {
            ticker.cancel();
        }
        self.elapsed.send_replace(duration);
        debug!(%started_at, %ended_at, %duration, "session stopped");

        Ok(SessionRecord {
            started_at,
            ended_at,
            duration,
            clock_anomaly,
        })
    }

    fn fold(&mut self, date: NaiveDate, session: StudyDuration) -> Result<()> {
        let daily = DailyStats::load(&self.store, date)?;
        let week_total = read_duration(&self.store, keys::TOTAL_THIS_WEEK)?;

        StatsUpdate {
            today_total: daily.total_today + session,
            week_total: week_total + session,
            sessions: daily.sessions.saturating_add(1),
            last: session,
            longest_candidate: session,
        }
        .apply(&mut self.store, date)?;
        Ok(())
    }

    /// Zeroes today's session count, last, longest and total.
    pub fn clear_daily(&mut self) -> Result<()> {
        if let Phase::Running { .. } = self.phase {
            return Err(self.invalid("clear daily stats"));
        }
        let today = self.today();
        DailyStats::clear(&mut self.store, today)?;
        self.elapsed.send_replace(StudyDuration::ZERO);
        debug!(%today, "daily stats cleared");
        Ok(())
    }

    /// Wipes the store except the saved report path and the notes.
    pub fn clear_weekly(&mut self) -> Result<()> {
        if let Phase::Running { .. } = self.phase {
            return Err(self.invalid("clear weekly stats"));
        }

        let mut preserved = Vec::new();
        for key in keys::PRESERVED {
            if self.store.has(key)? {
                preserved.push((key.to_string(), self.store.get(key, "")?));
            }
        }

        self.store.replace_all(&preserved)?;
        self.elapsed.send_replace(StudyDuration::ZERO);
        debug!("weekly stats cleared");
        Ok(())
    }

    /// Stops the display tick and drops an unfinished session without
    /// recording it. Returns the start time of the discarded session.
    pub fn shutdown(&mut self) -> Option<NaiveDateTime> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Running { started_at, mut ticker } => {
                ticker.cancel();
                warn!(%started_at, "discarding unfinished session on shutdown");
                Some(started_at)
            }
            Phase::Idle => None,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Idle => SessionState::Idle,
            Phase::Running { .. } => SessionState::Running,
        }
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        match &self.phase {
            Phase::Running { started_at, .. } => Some(*started_at),
            Phase::Idle => None,
        }
    }

    /// Time elapsed in the running session, computed from the clock now.
    pub fn elapsed(&self) -> StudyDuration {
        match &self.phase {
            Phase::Running { started_at, .. } => StudyDuration::between(*started_at, self.clock.now()).unwrap_or_default(),
            Phase::Idle => StudyDuration::ZERO,
        }
    }

    /// Receiver updated on every display tick.
    pub fn subscribe_elapsed(&self) -> watch::Receiver<StudyDuration> {
        self.elapsed.subscribe()
    }

    pub fn is_ticking(&self) -> bool {
        match &self.phase {
            Phase::Running { ticker, .. } => ticker.is_active(),
            Phase::Idle => false,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    pub fn daily_stats(&self) -> Result<DailyStats> {
        DailyStats::load(&self.store, self.today())
    }

    pub fn weekly_stats(&self) -> Result<WeeklyStats> {
        WeeklyStats::load(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Direct store access for report import/export. Rejected while a
    /// session runs.
    pub fn store_mut(&mut self) -> Result<&mut S> {
        if let Phase::Running { .. } = self.phase {
            return Err(self.invalid("modify stored stats"));
        }
        Ok(&mut self.store)
    }

    fn invalid(&self, operation: &'static str) -> StudyError {
        StudyError::InvalidState {
            operation,
            state: self.state(),
        }
    }
}

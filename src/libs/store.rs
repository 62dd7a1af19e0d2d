//! Durable key-value mapping the session engine reads and writes.
//!
//! The engine never assumes a backing technology: anything implementing
//! [`StatsStore`] will do. [`crate::db::preferences::SqliteStore`] is the
//! on-disk implementation, [`MemoryStore`] keeps everything in a `HashMap`.
//!
//! ## Key schema
//!
//! Date-scoped keys carry the calendar date they belong to, so yesterday's
//! values simply stop being read once the date changes:
//!
//! ```text
//! sessions(2024-01-03)          session count
//! last_session(2024-01-03)      last session duration
//! longest_session(2024-01-03)   longest session duration
//! total_today(2024-01-03)       total study time that day
//! ```
//!
//! Global keys: `total_this_week`, `week_reset`, `notes`, `saved_data_path`
//! and one key per weekday (`MONDAY` .. `SUNDAY`) holding that day's total.

use crate::libs::error::Result;
use std::collections::HashMap;

pub mod keys {
    use chrono::{NaiveDate, Weekday};

    pub const SESSIONS: &str = "sessions";
    pub const LAST_SESSION: &str = "last_session";
    pub const LONGEST_SESSION: &str = "longest_session";
    pub const TOTAL_TODAY: &str = "total_today";

    pub const TOTAL_THIS_WEEK: &str = "total_this_week";
    pub const WEEK_RESET: &str = "week_reset";
    pub const NOTES: &str = "notes";
    pub const SAVED_DATA_PATH: &str = "saved_data_path";

    /// Keys that survive a weekly clear.
    pub const PRESERVED: [&str; 2] = [SAVED_DATA_PATH, NOTES];

    pub const WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn dated(name: &str, date: NaiveDate) -> String {
        format!("{}({})", name, date.format("%Y-%m-%d"))
    }

    pub fn weekday(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "MONDAY",
            Weekday::Tue => "TUESDAY",
            Weekday::Wed => "WEDNESDAY",
            Weekday::Thu => "THURSDAY",
            Weekday::Fri => "FRIDAY",
            Weekday::Sat => "SATURDAY",
            Weekday::Sun => "SUNDAY",
        }
    }
}

/// Contract between the engine and its persistence.
///
/// Last write wins; no transactional guarantees beyond [`StatsStore::put_all`]
/// applying its entries together where the backend supports it.
pub trait StatsStore {
    fn get(&self, key: &str, default: &str) -> Result<String>;

    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    fn has(&self, key: &str) -> Result<bool>;

    fn remove(&mut self, key: &str) -> Result<()>;

    fn keys(&self) -> Result<Vec<String>>;

    fn clear_all(&mut self) -> Result<()>;

    /// Integer value; unparseable text yields `default`.
    fn get_int(&self, key: &str, default: i64) -> Result<i64> {
        if !self.has(key)? {
            return Ok(default);
        }
        Ok(self.get(key, "")?.trim().parse().unwrap_or(default))
    }

    fn put_int(&mut self, key: &str, value: i64) -> Result<()> {
        self.put(key, &value.to_string())
    }

    /// Boolean value; anything but `true`/`false` yields `default`.
    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        let value = self.get(key, "")?;
        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Ok(default)
        }
    }

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.put(key, if value { "true" } else { "false" })
    }

    fn put_all(&mut self, entries: &[(String, String)]) -> Result<()> {
        for (key, value) in entries {
            self.put(key, value)?;
        }
        Ok(())
    }

    /// Drops every key and writes `entries` in their place, together where
    /// the backend supports it.
    fn replace_all(&mut self, entries: &[(String, String)]) -> Result<()> {
        self.clear_all()?;
        self.put_all(entries)
    }
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StatsStore for MemoryStore {
    fn get(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.entries.get(key).cloned().unwrap_or_else(|| default.to_string()))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn clear_all(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

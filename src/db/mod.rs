//! Database layer for studylog.
//!
//! The tracker keeps all of its state as string key-value pairs, so the
//! schema is a single `preferences` table created on open.
//!
//! ## Usage
//!
//! ```rust
//! use studylog::db::preferences::SqliteStore;
//! use studylog::libs::store::StatsStore;
//!
//! let mut store = SqliteStore::in_memory()?;
//! store.put("notes", "chapter 4")?;
//! assert_eq!(store.get("notes", "")?, "chapter 4");
//! # Ok::<(), studylog::libs::error::StudyError>(())
//! ```

/// Connection management.
pub mod db;

/// SQLite-backed stats store.
pub mod preferences;

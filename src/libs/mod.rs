//! Core library modules for studylog.
//!
//! ## Features
//!
//! - **Timekeeping**: Duration codec, clock, display tick, session engine
//! - **Aggregation**: Daily and weekly stats over an abstract key-value store
//! - **Weekly Rollover**: Date-driven reset of the weekly totals
//! - **Reports**: Plain-text export/import and weekly history reconstruction
//! - **Presentation**: Localized labels, weekly chart, console tables, messages
//! - **Infrastructure**: Configuration, data directory, logging, errors
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
//! println!("{}", engine.weekly_stats()?.total_this_week.humanize());
//! # Ok::<(), studylog::libs::error::StudyError>(())
//! ```

pub mod chart;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod language;
pub mod logger;
pub mod messages;
pub mod report;
pub mod rollover;
pub mod session;
pub mod stats;
pub mod store;
pub mod ticker;
pub mod view;

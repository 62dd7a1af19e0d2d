//! # Studylog - personal study session tracker
//!
//! A command-line utility for timing study sessions and keeping daily and
//! weekly study statistics.
//!
//! ## Features
//!
//! - **Session Timing**: Start/stop sessions with a live elapsed-time display
//! - **Daily Stats**: Session count, last and longest session, total today
//! - **Weekly Stats**: Total this week and per-weekday totals with automatic weekly reset
//! - **Weekly Chart**: Bar chart of study time per weekday
//! - **Reports**: Plain-text daily reports that round-trip through export and import
//! - **Notes**: A free-text scratchpad kept alongside the stats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studylog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

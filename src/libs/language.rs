//! Display languages and the localized labels of report files and the chart.
//!
//! Labels vary by language, values never do: a report written in Serbian is
//! imported by an English install without trouble.

use chrono::Weekday;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
    #[serde(rename = "sr")]
    #[value(name = "sr")]
    Serbian,
}

/// The five report lines, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    Sessions,
    LastSession,
    LongestSession,
    TotalToday,
    TotalThisWeek,
}

impl ReportField {
    pub const ALL: [ReportField; 5] = [
        ReportField::Sessions,
        ReportField::LastSession,
        ReportField::LongestSession,
        ReportField::TotalToday,
        ReportField::TotalThisWeek,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReportField::Sessions => "number of sessions",
            ReportField::LastSession => "last session",
            ReportField::LongestSession => "longest session",
            ReportField::TotalToday => "total study time today",
            ReportField::TotalThisWeek => "total study time this week",
        }
    }
}

/// Captions of the live session view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCaption {
    Started,
    Finished,
    Elapsed,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Serbian];

    /// Report line prefix, including the trailing `": "`.
    pub fn label(&self, field: ReportField) -> &'static str {
        match (self, field) {
            (Language::English, ReportField::Sessions) => "Number of sessions: ",
            (Language::English, ReportField::LastSession) => "Last session: ",
            (Language::English, ReportField::LongestSession) => "Longest session: ",
            (Language::English, ReportField::TotalToday) => "Total study time today: ",
            (Language::English, ReportField::TotalThisWeek) => "Total study time this week: ",
            (Language::Serbian, ReportField::Sessions) => "Broj sesija: ",
            (Language::Serbian, ReportField::LastSession) => "Poslednja sesija: ",
            (Language::Serbian, ReportField::LongestSession) => "Najduza sesija: ",
            (Language::Serbian, ReportField::TotalToday) => "Ukupno vreme ucenja danas: ",
            (Language::Serbian, ReportField::TotalThisWeek) => "Ukupno vreme ucenja ove nedelje: ",
        }
    }

    pub fn date_label(&self) -> &'static str {
        match self {
            Language::English => "Date: ",
            Language::Serbian => "Datum: ",
        }
    }

    pub fn session_caption(&self, caption: SessionCaption) -> &'static str {
        match (self, caption) {
            (Language::English, SessionCaption::Started) => "Session started: ",
            (Language::English, SessionCaption::Finished) => "Session finished: ",
            (Language::English, SessionCaption::Elapsed) => "Elapsed time: ",
            (Language::Serbian, SessionCaption::Started) => "Sesija zapoceta: ",
            (Language::Serbian, SessionCaption::Finished) => "Sesija zavrsena: ",
            (Language::Serbian, SessionCaption::Elapsed) => "Proteklo vreme: ",
        }
    }

    pub fn weekday(&self, day: Weekday) -> &'static str {
        match (self, day) {
            (Language::English, Weekday::Mon) => "Monday",
            (Language::English, Weekday::Tue) => "Tuesday",
            (Language::English, Weekday::Wed) => "Wednesday",
            (Language::English, Weekday::Thu) => "Thursday",
            (Language::English, Weekday::Fri) => "Friday",
            (Language::English, Weekday::Sat) => "Saturday",
            (Language::English, Weekday::Sun) => "Sunday",
            (Language::Serbian, Weekday::Mon) => "Ponedeljak",
            (Language::Serbian, Weekday::Tue) => "Utorak",
            (Language::Serbian, Weekday::Wed) => "Sreda",
            (Language::Serbian, Weekday::Thu) => "Cetvrtak",
            (Language::Serbian, Weekday::Fri) => "Petak",
            (Language::Serbian, Weekday::Sat) => "Subota",
            (Language::Serbian, Weekday::Sun) => "Nedelja",
        }
    }

    pub fn day_axis(&self) -> &'static str {
        match self {
            Language::English => "Day",
            Language::Serbian => "Dan",
        }
    }

    pub fn time_axis(&self) -> &'static str {
        match self {
            Language::English => "Study time",
            Language::Serbian => "Vreme ucenja",
        }
    }

    pub fn unit_name(&self, unit: crate::libs::chart::ChartUnit) -> &'static str {
        use crate::libs::chart::ChartUnit;
        match (self, unit) {
            (Language::English, ChartUnit::Seconds) => "seconds",
            (Language::English, ChartUnit::Minutes) => "minutes",
            (Language::English, ChartUnit::Hours) => "hours",
            (Language::Serbian, ChartUnit::Seconds) => "sekunde",
            (Language::Serbian, ChartUnit::Minutes) => "minuti",
            (Language::Serbian, ChartUnit::Hours) => "sati",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Serbian => write!(f, "Serbian"),
        }
    }
}

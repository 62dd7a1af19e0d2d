//! Weekly bar chart data.

use crate::libs::duration::StudyDuration;
use crate::libs::language::Language;
use crate::libs::stats::WeeklyStats;
use chrono::Weekday;

const BAR_WIDTH: usize = 40;

/// Unit the chart values are expressed in, picked from the busiest day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartUnit {
    Seconds,
    Minutes,
    Hours,
}

impl ChartUnit {
    /// Hours once a day exceeds 59 minutes, minutes once it exceeds 59 seconds.
    pub fn for_max(max: StudyDuration) -> Self {
        if max.as_secs() / 60 > 59 {
            ChartUnit::Hours
        } else if max.as_secs() > 59 {
            ChartUnit::Minutes
        } else {
            ChartUnit::Seconds
        }
    }

    pub fn value(&self, duration: StudyDuration) -> f64 {
        match self {
            ChartUnit::Seconds => duration.as_secs() as f64,
            ChartUnit::Minutes => (duration.as_secs() / 60) as f64,
            ChartUnit::Hours => duration.chart_hours(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub weekday: Weekday,
    pub label: &'static str,
    pub duration: StudyDuration,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyChart {
    pub unit: ChartUnit,
    pub x_caption: &'static str,
    pub y_caption: String,
    pub bars: Vec<ChartBar>,
}

impl WeeklyChart {
    pub fn from_weekly(weekly: &WeeklyStats, language: Language) -> Self {
        let unit = ChartUnit::for_max(weekly.busiest_day());
        let bars = weekly
            .iter()
            .map(|(weekday, duration)| ChartBar {
                weekday,
                label: language.weekday(weekday),
                duration,
                value: unit.value(duration),
            })
            .collect();

        WeeklyChart {
            unit,
            x_caption: language.day_axis(),
            y_caption: format!("{} ({})", language.time_axis(), language.unit_name(unit)),
            bars,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max)
    }

    /// Text bar scaled so the largest value spans the full width.
    pub fn bar_text(&self, bar: &ChartBar) -> String {
        let max = self.max_value();
        if max <= 0.0 {
            return String::new();
        }
        let len = ((bar.value / max) * BAR_WIDTH as f64).round() as usize;
        "█".repeat(len)
    }
}

use super::chart::WeeklyChart;
use super::language::{Language, ReportField, SessionCaption};
use super::session::SessionRecord;
use super::stats::{DailyStats, WeeklyStats};
use prettytable::{row, Table};

const TIME_FORMAT: &str = "%H:%M:%S %p";

pub struct View {}

impl View {
    pub fn stats(daily: &DailyStats, weekly: &WeeklyStats, language: Language) {
        let mut table = Table::new();

        let date_label = strip(language.date_label());
        table.add_row(row![date_label, daily.date.format("%A, %-d %B %Y")]);
        table.add_row(row![label(language, ReportField::Sessions), daily.sessions]);
        table.add_row(row![label(language, ReportField::LastSession), daily.last_session.humanize()]);
        table.add_row(row![label(language, ReportField::LongestSession), daily.longest_session.humanize()]);
        table.add_row(row![label(language, ReportField::TotalToday), daily.total_today.humanize()]);
        table.add_row(row![label(language, ReportField::TotalThisWeek), weekly.total_this_week.humanize()]);
        table.printstd();
    }

    pub fn chart(chart: &WeeklyChart) {
        let mut table = Table::new();

        table.add_row(row![chart.x_caption, chart.y_caption, ""]);
        for bar in &chart.bars {
            table.add_row(row![bar.label, format!("{:.2}", bar.value), chart.bar_text(bar)]);
        }
        table.printstd();
    }

    pub fn session(record: &SessionRecord, language: Language) {
        let mut table = Table::new();

        table.add_row(row![caption(language, SessionCaption::Started), record.started_at.format(TIME_FORMAT)]);
        table.add_row(row![caption(language, SessionCaption::Finished), record.ended_at.format(TIME_FORMAT)]);
        table.add_row(row![caption(language, SessionCaption::Elapsed), record.duration.humanize()]);
        table.printstd();
    }

    /// Live line rewritten in place while a session runs.
    pub fn elapsed_line(elapsed: &str, language: Language) -> String {
        format!("\r{}{}    ", language.session_caption(SessionCaption::Elapsed), elapsed)
    }
}

fn label(language: Language, field: ReportField) -> &'static str {
    strip(language.label(field))
}

fn caption(language: Language, caption: SessionCaption) -> &'static str {
    strip(language.session_caption(caption))
}

// Labels carry a trailing ": " for report lines; tables don't want it.
fn strip(text: &'static str) -> &'static str {
    text.trim_end_matches(|c: char| c == ' ' || c == ':')
}

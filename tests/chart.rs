#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use studylog::libs::chart::{ChartUnit, WeeklyChart};
    use studylog::libs::duration::StudyDuration;
    use studylog::libs::language::Language;
    use studylog::libs::stats::WeeklyStats;

    fn weekly(per_day_secs: [u64; 7]) -> WeeklyStats {
        WeeklyStats {
            total_this_week: StudyDuration::from_secs(per_day_secs.iter().sum()),
            per_day: per_day_secs.map(StudyDuration::from_secs),
            reset_pending: false,
        }
    }

    #[test]
    fn test_unit_selection() {
        assert_eq!(ChartUnit::for_max(StudyDuration::from_secs(59)), ChartUnit::Seconds);
        assert_eq!(ChartUnit::for_max(StudyDuration::from_secs(60)), ChartUnit::Minutes);
        assert_eq!(ChartUnit::for_max(StudyDuration::from_secs(59 * 60 + 59)), ChartUnit::Minutes);
        assert_eq!(ChartUnit::for_max(StudyDuration::from_secs(60 * 60)), ChartUnit::Hours);
    }

    #[test]
    fn test_values_in_hours() {
        let chart = WeeklyChart::from_weekly(&weekly([5400, 1800, 0, 0, 0, 0, 7200]), Language::English);
        assert_eq!(chart.unit, ChartUnit::Hours);
        assert_eq!(chart.bars.len(), 7);
        assert_eq!(chart.bars[0].weekday, Weekday::Mon);
        assert_eq!(chart.bars[0].label, "Monday");
        assert_eq!(chart.bars[0].value, 1.5);
        assert_eq!(chart.bars[1].value, 0.5);
        assert_eq!(chart.bars[6].value, 2.0);
        assert_eq!(chart.max_value(), 2.0);
        assert_eq!(chart.y_caption, "Study time (hours)");
        assert_eq!(chart.x_caption, "Day");
    }

    #[test]
    fn test_values_in_minutes_drop_seconds() {
        let chart = WeeklyChart::from_weekly(&weekly([0, 0, 150, 0, 0, 0, 0]), Language::Serbian);
        assert_eq!(chart.unit, ChartUnit::Minutes);
        assert_eq!(chart.bars[2].label, "Sreda");
        assert_eq!(chart.bars[2].value, 2.0);
        assert_eq!(chart.y_caption, "Vreme ucenja (minuti)");
    }

    #[test]
    fn test_bars_scale_to_busiest_day() {
        let chart = WeeklyChart::from_weekly(&weekly([40, 20, 0, 0, 0, 0, 0]), Language::English);
        assert_eq!(chart.bar_text(&chart.bars[0]).chars().count(), 40);
        assert_eq!(chart.bar_text(&chart.bars[1]).chars().count(), 20);
        assert!(chart.bar_text(&chart.bars[2]).is_empty());
    }

    #[test]
    fn test_empty_week() {
        let chart = WeeklyChart::from_weekly(&weekly([0; 7]), Language::English);
        assert_eq!(chart.unit, ChartUnit::Seconds);
        assert!(chart.bars.iter().all(|bar| chart.bar_text(bar).is_empty()));
    }
}

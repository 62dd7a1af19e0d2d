#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};
    use std::fs;
    use studylog::libs::duration::StudyDuration;
    use studylog::libs::report::import_weekly_history;
    use studylog::libs::stats::{clear_weekday_totals, WeeklyStats};
    use studylog::libs::store::{keys, MemoryStore, StatsStore};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Reports for Monday 2024-01-01 through Friday 2024-01-05; day `n`
    /// holds `n * 10` minutes.
    struct HistoryTestContext {
        temp_dir: TempDir,
        store: MemoryStore,
    }

    fn report_text(total_today: &str) -> String {
        format!(
            "Number of sessions: 1\nLast session: PT1M\nLongest session: PT1M\nTotal study time today: {}\nTotal study time this week: PT1H\n",
            total_today
        )
    }

    impl TestContext for HistoryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            for day in 1..=5 {
                let path = temp_dir.path().join(format!("2024-01-0{}.txt", day));
                fs::write(path, report_text(&format!("PT{}M", day * 10))).unwrap();
            }
            let mut store = MemoryStore::new();
            store.put(keys::weekday(Weekday::Thu), "PT7M").unwrap();
            store.put(keys::weekday(Weekday::Fri), "PT8M").unwrap();
            HistoryTestContext { temp_dir, store }
        }
    }

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    #[test_context(HistoryTestContext)]
    #[test]
    fn test_loads_days_up_to_selected(ctx: &mut HistoryTestContext) {
        let result = import_weekly_history(ctx.temp_dir.path(), wednesday(), &mut ctx.store).unwrap();

        assert_eq!(result.loaded.len(), 3);
        assert!(result.errors.is_empty());

        let weekly = WeeklyStats::load(&ctx.store).unwrap();
        assert_eq!(weekly.day(Weekday::Mon), StudyDuration::from_mins(10));
        assert_eq!(weekly.day(Weekday::Tue), StudyDuration::from_mins(20));
        assert_eq!(weekly.day(Weekday::Wed), StudyDuration::from_mins(30));
        assert_eq!(weekly.day(Weekday::Thu), StudyDuration::from_mins(7));
        assert_eq!(weekly.day(Weekday::Fri), StudyDuration::from_mins(8));
    }

    #[test_context(HistoryTestContext)]
    #[test]
    fn test_cleared_weekdays_stay_zero_after_selected(ctx: &mut HistoryTestContext) {
        clear_weekday_totals(&mut ctx.store).unwrap();
        import_weekly_history(ctx.temp_dir.path(), wednesday(), &mut ctx.store).unwrap();

        let weekly = WeeklyStats::load(&ctx.store).unwrap();
        assert_eq!(weekly.day(Weekday::Thu), StudyDuration::ZERO);
        assert_eq!(weekly.day(Weekday::Fri), StudyDuration::ZERO);
        assert_eq!(weekly.day(Weekday::Wed), StudyDuration::from_mins(30));
    }

    #[test_context(HistoryTestContext)]
    #[test]
    fn test_broken_file_does_not_stop_scan(ctx: &mut HistoryTestContext) {
        fs::write(ctx.temp_dir.path().join("2024-01-02.txt"), report_text("twenty minutes")).unwrap();
        fs::write(ctx.temp_dir.path().join("readme.md"), "not a report").unwrap();
        fs::write(ctx.temp_dir.path().join("draft.txt"), "not a report either").unwrap();

        let result = import_weekly_history(ctx.temp_dir.path(), wednesday(), &mut ctx.store).unwrap();

        assert_eq!(result.loaded.len(), 2);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].path.ends_with("2024-01-02.txt"));

        let weekly = WeeklyStats::load(&ctx.store).unwrap();
        assert_eq!(weekly.day(Weekday::Mon), StudyDuration::from_mins(10));
        assert_eq!(weekly.day(Weekday::Wed), StudyDuration::from_mins(30));
    }

    #[test_context(HistoryTestContext)]
    #[test]
    fn test_serbian_reports_are_read(ctx: &mut HistoryTestContext) {
        fs::write(
            ctx.temp_dir.path().join("2024-01-01.txt"),
            "Broj sesija: 1\nPoslednja sesija: PT1M\nNajduza sesija: PT1M\nUkupno vreme ucenja danas: PT45M\nUkupno vreme ucenja ove nedelje: PT45M\n",
        )
        .unwrap();

        import_weekly_history(ctx.temp_dir.path(), wednesday(), &mut ctx.store).unwrap();
        assert_eq!(
            WeeklyStats::load(&ctx.store).unwrap().day(Weekday::Mon),
            StudyDuration::from_mins(45)
        );
    }

    #[test_context(HistoryTestContext)]
    #[test]
    fn test_missing_directory_is_an_error(ctx: &mut HistoryTestContext) {
        let missing = ctx.temp_dir.path().join("gone");
        assert!(import_weekly_history(&missing, wednesday(), &mut ctx.store).is_err());
    }
}

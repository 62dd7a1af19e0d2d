#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};
    use studylog::libs::rollover::{RolloverOutcome, RolloverState, WeeklyRollover};
    use studylog::libs::store::{keys, MemoryStore, StatsStore};
    use test_context::{test_context, TestContext};

    struct RolloverTestContext {
        store: MemoryStore,
        rollover: WeeklyRollover,
    }

    impl TestContext for RolloverTestContext {
        fn setup() -> Self {
            let mut store = MemoryStore::new();
            store.put(keys::TOTAL_THIS_WEEK, "PT3H").unwrap();
            for day in keys::WEEKDAYS {
                store.put(keys::weekday(day), "PT25M").unwrap();
            }
            store.put(keys::NOTES, "keep me").unwrap();
            RolloverTestContext {
                store,
                rollover: WeeklyRollover::default(),
            }
        }
    }

    fn date(day: u32) -> NaiveDate {
        // 2024-01-01 is a Monday.
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test_context(RolloverTestContext)]
    #[test]
    fn test_reset_on_first_day(ctx: &mut RolloverTestContext) {
        assert_eq!(RolloverState::load(&ctx.store).unwrap(), RolloverState::PendingReset);
        assert_eq!(ctx.rollover.apply(&mut ctx.store, date(1)).unwrap(), RolloverOutcome::Reset);

        assert_eq!(ctx.store.get(keys::TOTAL_THIS_WEEK, "").unwrap(), "PT0S");
        for day in keys::WEEKDAYS {
            assert_eq!(ctx.store.get(keys::weekday(day), "").unwrap(), "PT0S");
        }
        assert_eq!(ctx.store.get(keys::NOTES, "").unwrap(), "keep me");
        assert_eq!(RolloverState::load(&ctx.store).unwrap(), RolloverState::ResetDone);
    }

    #[test_context(RolloverTestContext)]
    #[test]
    fn test_second_activation_same_day_is_noop(ctx: &mut RolloverTestContext) {
        ctx.rollover.apply(&mut ctx.store, date(1)).unwrap();
        ctx.store.put(keys::TOTAL_THIS_WEEK, "PT10M").unwrap();
        ctx.store.put("MONDAY", "PT10M").unwrap();

        assert_eq!(ctx.rollover.apply(&mut ctx.store, date(1)).unwrap(), RolloverOutcome::AlreadyReset);
        assert_eq!(ctx.store.get(keys::TOTAL_THIS_WEEK, "").unwrap(), "PT10M");
        assert_eq!(ctx.store.get("MONDAY", "").unwrap(), "PT10M");
    }

    #[test_context(RolloverTestContext)]
    #[test]
    fn test_other_days_arm_without_touching_totals(ctx: &mut RolloverTestContext) {
        ctx.store.put_bool(keys::WEEK_RESET, false).unwrap();

        assert_eq!(ctx.rollover.apply(&mut ctx.store, date(3)).unwrap(), RolloverOutcome::Armed);
        assert_eq!(RolloverState::load(&ctx.store).unwrap(), RolloverState::PendingReset);
        assert_eq!(ctx.store.get(keys::TOTAL_THIS_WEEK, "").unwrap(), "PT3H");

        assert_eq!(ctx.rollover.apply(&mut ctx.store, date(4)).unwrap(), RolloverOutcome::Armed);
        assert_eq!(RolloverState::load(&ctx.store).unwrap(), RolloverState::PendingReset);
    }

    #[test_context(RolloverTestContext)]
    #[test]
    fn test_week_cycle(ctx: &mut RolloverTestContext) {
        assert_eq!(ctx.rollover.apply(&mut ctx.store, date(1)).unwrap(), RolloverOutcome::Reset);
        assert_eq!(ctx.rollover.apply(&mut ctx.store, date(5)).unwrap(), RolloverOutcome::Armed);
        ctx.store.put(keys::TOTAL_THIS_WEEK, "PT2H").unwrap();
        assert_eq!(ctx.rollover.apply(&mut ctx.store, date(8)).unwrap(), RolloverOutcome::Reset);
        assert_eq!(ctx.store.get(keys::TOTAL_THIS_WEEK, "").unwrap(), "PT0S");
    }

    #[test_context(RolloverTestContext)]
    #[test]
    fn test_reset_zeroes_todays_total(ctx: &mut RolloverTestContext) {
        let today_key = keys::dated(keys::TOTAL_TODAY, date(1));
        ctx.store.put(&today_key, "PT45M").unwrap();
        ctx.rollover.apply(&mut ctx.store, date(1)).unwrap();
        assert_eq!(ctx.store.get(&today_key, "").unwrap(), "PT0S");
    }

    #[test_context(RolloverTestContext)]
    #[test]
    fn test_sunday_first_day(ctx: &mut RolloverTestContext) {
        let rollover = WeeklyRollover::new(Weekday::Sun);
        assert_eq!(rollover.first_day(), Weekday::Sun);
        assert_eq!(rollover.apply(&mut ctx.store, date(1)).unwrap(), RolloverOutcome::Armed);
        assert_eq!(rollover.apply(&mut ctx.store, date(7)).unwrap(), RolloverOutcome::Reset);
    }
}

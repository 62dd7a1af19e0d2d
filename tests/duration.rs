#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use studylog::libs::duration::StudyDuration;
    use studylog::libs::error::StudyError;

    #[test]
    fn test_format_zero() {
        assert_eq!(StudyDuration::ZERO.format(), "PT0S");
    }

    #[test]
    fn test_format_omits_zero_components() {
        assert_eq!(StudyDuration::from_secs(90).format(), "PT1M30S");
        assert_eq!(StudyDuration::from_secs(300).format(), "PT5M");
        assert_eq!(StudyDuration::from_secs(3600).format(), "PT1H");
        assert_eq!(StudyDuration::from_secs(3605).format(), "PT1H5S");
        assert_eq!(StudyDuration::from_secs(45).format(), "PT45S");
    }

    #[test]
    fn test_format_does_not_fold_days() {
        assert_eq!(StudyDuration::from_secs(25 * 3600 + 60).format(), "PT25H1M");
    }

    #[test]
    fn test_round_trip() {
        for secs in [0, 1, 59, 60, 61, 599, 3599, 3600, 3661, 86_399, 86_400, 90_061, 1_000_000] {
            let duration = StudyDuration::from_secs(secs);
            assert_eq!(StudyDuration::parse(&duration.format()).unwrap(), duration, "secs = {}", secs);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(StudyDuration::parse("PT0s").unwrap(), StudyDuration::ZERO);
        assert_eq!(StudyDuration::parse("pt1h2m3s").unwrap().as_secs(), 3723);
    }

    #[test]
    fn test_parse_days_and_fractions() {
        assert_eq!(StudyDuration::parse("P1D").unwrap().as_secs(), 86_400);
        assert_eq!(StudyDuration::parse("P1DT2H").unwrap().as_secs(), 93_600);
        assert_eq!(StudyDuration::parse("PT5.987S").unwrap().as_secs(), 5);
        assert_eq!(StudyDuration::parse("PT1M0,5S").unwrap().as_secs(), 60);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for text in ["", "P", "PT", "5M", "PT5", "PTM", "PT5X", "PT1S2M", "PT1M1M", "-PT5S", "PT-5S", "P1H", "PT1.5M", "PT.5S", " PT5S"] {
            match StudyDuration::parse(text) {
                Err(StudyError::MalformedDuration { .. }) => {}
                other => panic!("expected MalformedDuration for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_humanize() {
        assert_eq!(StudyDuration::ZERO.humanize(), "0s");
        assert_eq!(StudyDuration::from_secs(42).humanize(), "42s");
        assert_eq!(StudyDuration::from_secs(60).humanize(), "1m, 0s");
        assert_eq!(StudyDuration::from_secs(125).humanize(), "2m, 5s");
        assert_eq!(StudyDuration::from_secs(3600).humanize(), "1h, 0m, 0s");
        assert_eq!(StudyDuration::from_secs(3723).humanize(), "1h, 2m, 3s");
    }

    #[test]
    fn test_chart_hours_drops_seconds() {
        assert_eq!(StudyDuration::from_secs(90 * 60 + 59).chart_hours(), 1.5);
        assert_eq!(StudyDuration::from_secs(30 * 60).chart_hours(), 0.5);
        assert_eq!(StudyDuration::from_secs(59).chart_hours(), 0.0);
    }

    #[test]
    fn test_between_detects_backwards_clock() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(10, 0, 0).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(10, 1, 30).unwrap();
        assert_eq!(StudyDuration::between(start, later), Some(StudyDuration::from_secs(90)));
        assert_eq!(StudyDuration::between(later, start), None);
        assert_eq!(StudyDuration::between(start, start), Some(StudyDuration::ZERO));

        let day = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let begin = day.and_hms_milli_opt(10, 0, 0, 500).unwrap();
        let slightly_earlier = day.and_hms_milli_opt(10, 0, 0, 200).unwrap();
        assert_eq!(StudyDuration::between(begin, slightly_earlier), None);
        assert_eq!(
            StudyDuration::between(slightly_earlier, begin),
            Some(StudyDuration::ZERO)
        );
    }

    #[test]
    fn test_display_and_from_str() {
        let duration: StudyDuration = "PT10M".parse().unwrap();
        assert_eq!(duration.to_string(), "PT10M");
        assert_eq!(duration + StudyDuration::from_secs(5), StudyDuration::from_secs(605));
    }
}

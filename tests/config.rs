#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::Duration;
    use studylog::libs::config::Config;
    use studylog::libs::error::StudyError;
    use studylog::libs::language::Language;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join("config.json")
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.first_day_of_week, Weekday::Mon);
        assert_eq!(config.reports_dir, None);
        assert_eq!(config.tick_period(), Duration::from_secs(1));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read_from(&ctx.config_path()).unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            language: Language::Serbian,
            first_day_of_week: Weekday::Sun,
            reports_dir: Some(ctx.temp_dir.path().join("reports")),
            tick_interval_ms: 250,
        };
        config.save_to(&ctx.config_path()).unwrap();

        let loaded = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.tick_period(), Duration::from_millis(250));

        let raw = fs::read_to_string(ctx.config_path()).unwrap();
        assert!(raw.contains("\"sr\""));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_uses_defaults(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), r#"{ "language": "sr" }"#).unwrap();
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config.language, Language::Serbian);
        assert_eq!(config.first_day_of_week, Weekday::Mon);
        assert_eq!(config.tick_interval_ms, 1000);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_config_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), "{ not json").unwrap();
        assert!(matches!(Config::read_from(&ctx.config_path()), Err(StudyError::Config(_))));
    }

    #[test]
    fn test_zero_tick_interval_is_clamped() {
        let config = Config {
            tick_interval_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_period(), Duration::from_millis(1));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_export_dir_resolution(ctx: &mut ConfigTestContext) {
        let saved = ctx.temp_dir.path().join("2024-01-03.txt");
        let saved = saved.to_string_lossy();

        let config = Config::default();
        assert_eq!(config.export_dir(""), Path::new("."));
        assert_eq!(config.export_dir(&saved), ctx.temp_dir.path());
        assert_eq!(config.export_dir("/no/such/dir/report.txt"), Path::new("."));

        let configured = Config {
            reports_dir: Some(PathBuf::from("/srv/reports")),
            ..Config::default()
        };
        assert_eq!(configured.export_dir(&saved), Path::new("/srv/reports"));
    }
}

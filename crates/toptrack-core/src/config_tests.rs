//! Tests for config module

#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::Error;

    // ========================================================================
    // Default value tests
    // ========================================================================

    #[test]
    fn test_config_default_values() {
        // Arrange & Act
        let config = TrackerConfig::default();

        // Assert
        assert_eq!(config.ticks_per_flush, 1);
        assert_eq!(config.promote_capacity, 1024);
        assert_eq!(config.promote_thresh, 64);
        assert!((config.remove_thresh - 0.05).abs() < f64::EPSILON);
        assert!((config.exp_decay.m - 0.8).abs() < f64::EPSILON);
        assert!((config.exp_decay.c - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.min_promote_score, 0.0);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(TrackerConfig::default().validate().is_ok());
    }

    // ========================================================================
    // from_toml tests
    // ========================================================================

    #[test]
    fn test_from_toml_overrides_defaults() {
        // Arrange
        let toml_str = r#"
            promote_capacity = 32
            promote_thresh = 8
        "#;

        // Act
        let config = TrackerConfig::from_toml(toml_str).expect("parse");

        // Assert
        assert_eq!(config.promote_capacity, 32);
        assert_eq!(config.promote_thresh, 8);
        // Untouched fields keep their defaults.
        assert!((config.exp_decay.m - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_toml_nested_decay_section() {
        let toml_str = r#"
            [exp_decay]
            m = 0.5
            c = 0.5
        "#;

        let config = TrackerConfig::from_toml(toml_str).expect("parse");
        assert!((config.exp_decay.m - 0.5).abs() < f64::EPSILON);
        assert!((config.exp_decay.c - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_toml_rejects_malformed_input() {
        let result = TrackerConfig::from_toml("this is not valid toml =====");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_path_reads_an_actual_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("create temp config file");
        write!(file, "promote_capacity = 16\npromote_thresh = 4\n").expect("write temp config");

        let config = TrackerConfig::load_from_path(file.path()).expect("load");
        assert_eq!(config.promote_capacity, 16);
        assert_eq!(config.promote_thresh, 4);
    }

    #[test]
    fn test_load_from_path_falls_back_to_defaults_when_file_is_absent() {
        let config = TrackerConfig::load_from_path("/nonexistent/toptrack.toml").expect("load");
        assert_eq!(config, TrackerConfig::default());
    }

    // ========================================================================
    // to_toml round-trip
    // ========================================================================

    #[test]
    fn test_to_toml_round_trips_through_from_toml() {
        let original = TrackerConfig {
            promote_capacity: 50,
            promote_thresh: 10,
            ..TrackerConfig::default()
        };

        let serialized = original.to_toml().expect("serialize");
        let restored = TrackerConfig::from_toml(&serialized).expect("parse");

        assert_eq!(restored, original);
    }

    // ========================================================================
    // validate() tests
    // ========================================================================

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = TrackerConfig {
            promote_capacity: 0,
            ..TrackerConfig::default()
        };
        assert_eq!(config.validate().unwrap_err(), Error::ZeroCapacity);
    }

    #[test]
    fn test_validate_rejects_threshold_over_capacity() {
        let config = TrackerConfig {
            promote_capacity: 10,
            promote_thresh: 11,
            ..TrackerConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::ThresholdExceedsCapacity {
                promote_thresh: 11,
                promote_capacity: 10
            }
        ));
    }

    #[test]
    fn test_validate_accepts_threshold_equal_to_capacity() {
        let config = TrackerConfig {
            promote_capacity: 10,
            promote_thresh: 10,
            ..TrackerConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_decay_params() {
        let config = TrackerConfig {
            exp_decay: DecayConfig { m: 1.5, c: 0.2 },
            ..TrackerConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::DecayParamOutOfRange { field: "exp_decay.m", .. }
        ));
    }

    #[test]
    fn test_validate_rejects_zero_ticks_per_flush() {
        let config = TrackerConfig {
            ticks_per_flush: 0,
            ..TrackerConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::DecayParamOutOfRange { field: "ticks_per_flush", .. }
        ));
    }

    #[test]
    fn test_validate_rejects_negative_remove_thresh() {
        let config = TrackerConfig {
            remove_thresh: -0.01,
            ..TrackerConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::DecayParamOutOfRange { field: "remove_thresh", .. }
        ));
    }
}

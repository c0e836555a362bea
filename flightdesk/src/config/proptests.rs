//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::{ConfigValidator, MAX_INPUT_RETRIES_LIMIT};
use crate::output::OutputFormat;
use proptest::prelude::*;

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Table), Just(OutputFormat::Json)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(0u32..=MAX_INPUT_RETRIES_LIMIT),
        prop::option::of(1u64..3600),
        prop::option::of(format_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(retries, timeout, format, autoinit)| Config {
            max_input_retries: retries,
            busy_timeout_seconds: timeout,
            output_format: format,
            disable_autoinit: autoinit,
        })
}

proptest! {
    #[test]
    fn merging_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn higher_layer_wins_when_set(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);
        prop_assert_eq!(merged.max_input_retries, high.max_input_retries.or(low.max_input_retries));
        prop_assert_eq!(merged.busy_timeout_seconds, high.busy_timeout_seconds.or(low.busy_timeout_seconds));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
    }

    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn zero_retries_is_unlimited(config in config_strategy()) {
        let limit = config.retry_limit();
        match config.max_input_retries {
            Some(0) => prop_assert_eq!(limit, None),
            Some(n) => prop_assert_eq!(limit, Some(n)),
            None => prop_assert!(limit.is_some()),
        }
    }
}

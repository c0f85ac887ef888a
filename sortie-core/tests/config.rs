use sortie_core::config::{ActionsConfig, StepConfig};
use sortie_core::{ConfigError, SessionConfig};

#[test]
fn empty_source_uses_defaults() {
    let config = SessionConfig::from_toml_str("").expect("empty config");
    assert_eq!(config, SessionConfig::default());
    assert!(config.actions.log_errors);
    assert_eq!(config.step.game_loops, 1);
}

#[test]
fn explicit_values_override_defaults() {
    let config = SessionConfig::from_toml_str(
        r#"
        [actions]
        log_errors = false

        [step]
        game_loops = 8
        "#,
    )
    .expect("config");

    assert_eq!(
        config,
        SessionConfig {
            actions: ActionsConfig { log_errors: false },
            step: StepConfig { game_loops: 8 },
        }
    );
}

#[test]
fn zero_game_loops_is_rejected() {
    let err = SessionConfig::from_toml_str("[step]\ngame_loops = 0\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "step.game_loops",
            ..
        }
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = SessionConfig::from_toml_str("[actions\nlog_errors = yes").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = SessionConfig::from_toml_str("[actions]\nretry = true\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = SessionConfig::load("/definitely/not/here/sortie.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("sortie.toml"), "{err}");
}

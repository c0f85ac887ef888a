mod common;

use common::{init_tracing, FakeTransport};
use sortie_core::{AbilityId, ActionResult, ConfigError, Session, SessionConfig, UnitTag};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn step_flushes_before_advancing() {
    init_tracing();
    let mut session = Session::new(FakeTransport::default());
    session.actions_mut().chat("gg");
    session.actions_mut().unit_order(&UnitTag(3), AbilityId(1));

    let summary = session.step();

    assert_eq!(summary.sent, 2);
    assert!(session.actions().is_empty());
    assert_eq!(session.transport().log, vec!["send:2", "step:1"]);
    assert_eq!(session.steps(), 1);
}

#[test]
fn step_with_nothing_queued_only_advances() {
    let mut session = Session::new(FakeTransport::default());
    session.step();
    session.step();

    let transport = session.into_transport();
    assert!(transport.batches.is_empty());
    assert_eq!(transport.steps, vec![1, 1]);
}

#[test]
fn manual_send_delivers_immediately() {
    let mut session = Session::new(FakeTransport::default());
    session.actions_mut().chat("now");
    session.send_actions();

    assert_eq!(session.transport().batches.len(), 1);
    assert!(session.transport().steps.is_empty());

    session.step();
    assert_eq!(session.transport().batches.len(), 1);
}

#[test]
fn before_step_hooks_run_in_order_ahead_of_flush() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut session = Session::new(FakeTransport::default());

    let seen = Rc::clone(&order);
    session.on_before_step(move |actions| {
        seen.borrow_mut().push("first");
        actions.chat("from hook");
    });
    let seen = Rc::clone(&order);
    session.on_before_step(move |actions| {
        seen.borrow_mut().push("second");
        assert_eq!(actions.len(), 1);
    });

    session.step();

    assert_eq!(*order.borrow(), vec!["first", "second"]);
    assert_eq!(session.transport().batches[0].len(), 1);
}

#[test]
fn config_sets_game_loops_and_logging_handler() {
    let config = SessionConfig::from_toml_str(
        r#"
        [step]
        game_loops = 4
        "#,
    )
    .expect("valid config");

    let mut session = Session::from_config(
        FakeTransport::rejecting(vec![ActionResult::NotSupported]),
        &config,
    )
    .expect("valid config");
    assert!(session.actions().has_error_handler());
    assert_eq!(session.game_loops(), 4);

    session.actions_mut().chat("unsupported");
    let summary = session.step();

    assert_eq!(summary.rejected, 1);
    assert_eq!(session.transport().steps, vec![4]);
}

#[test]
fn logging_can_be_disabled_by_config() {
    let config = SessionConfig::from_toml_str("[actions]\nlog_errors = false\n").expect("config");
    let session = Session::from_config(FakeTransport::default(), &config).expect("session");
    assert!(!session.actions().has_error_handler());
}

#[test]
fn hand_built_config_with_zero_game_loops_is_refused() {
    let mut config = SessionConfig::default();
    config.step.game_loops = 0;

    let err = Session::from_config(FakeTransport::default(), &config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "step.game_loops",
            ..
        }
    ));
}

#[test]
fn debug_output_hides_transport_and_hooks() {
    let session = Session::new(FakeTransport::default());
    let rendered = format!("{session:?}");
    assert!(rendered.contains("transport: <opaque>"), "{rendered}");
    assert!(rendered.contains("before_step: <opaque>"), "{rendered}");
    assert!(rendered.contains("steps: 0"), "{rendered}");
}

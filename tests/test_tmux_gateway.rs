// ABOUTME: Tests for the tmux gateway process handling using stand-in programs
// `true` and `false` play a tmux that always succeeds or always fails

use kiosk::tmux::{SessionGateway, TmuxError, TmuxGateway};

const MISSING_PROGRAM: &str = "/nonexistent/kiosk-test-tmux";

#[test]
fn test_successful_commands_return_ok() {
    let gateway = TmuxGateway::new("true");

    assert!(gateway.create_session("demo").is_ok());
    assert!(gateway.kill_session("demo").is_ok());
}

#[test]
fn test_empty_listing_is_empty_success() {
    let gateway = TmuxGateway::new("true");
    assert_eq!(gateway.list_sessions().unwrap(), Vec::<String>::new());
}

#[test]
fn test_non_zero_exit_is_execution_failure() {
    let gateway = TmuxGateway::new("false");

    let err = gateway.create_session("demo").unwrap_err();
    assert!(matches!(err, TmuxError::ExecutionFailed { action: "new-session", .. }));

    let err = gateway.kill_session("demo").unwrap_err();
    assert!(matches!(err, TmuxError::ExecutionFailed { action: "kill-session", .. }));

    let err = gateway.list_sessions().unwrap_err();
    assert!(matches!(err, TmuxError::ExecutionFailed { action: "list-sessions", .. }));
}

#[test]
fn test_missing_program_cannot_be_launched() {
    let gateway = TmuxGateway::new(MISSING_PROGRAM);

    assert!(matches!(
        gateway.create_session("demo"),
        Err(TmuxError::ExecutionFailed { .. })
    ));
    assert!(matches!(
        gateway.list_sessions(),
        Err(TmuxError::ExecutionFailed { .. })
    ));
}

#[test]
fn test_attach_to_absent_session_is_not_found() {
    let gateway = TmuxGateway::new("true");

    match gateway.attach_session("demo") {
        Err(TmuxError::SessionNotFound(name)) => assert_eq!(name, "demo"),
        Err(other) => panic!("expected SessionNotFound, got {other}"),
        Ok(never) => match never {},
    }
}

#[test]
fn test_attach_fails_on_listing_error_before_lookup() {
    let gateway = TmuxGateway::new(MISSING_PROGRAM);

    match gateway.attach_session("demo") {
        Err(TmuxError::ExecutionFailed { action, .. }) => assert_eq!(action, "list-sessions"),
        Err(other) => panic!("expected ExecutionFailed, got {other}"),
        Ok(never) => match never {},
    }
}

// ABOUTME: Tests that a reset requested while another thread is resetting waits for it
// Kept in its own test binary because it swaps `stty` on PATH for a slow stand-in

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::thread;
use std::time::Duration;

use kiosk::terminal;
use tempfile::TempDir;

#[test]
fn test_second_reset_returns_only_after_first_finishes() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("stty-finished");
    let stty = dir.path().join("stty");
    fs::write(
        &stty,
        format!("#!/bin/sh\nsleep 1\ntouch '{}'\n", marker.display()),
    )
    .unwrap();
    fs::set_permissions(&stty, fs::Permissions::from_mode(0o755)).unwrap();

    let path = env::var("PATH").unwrap_or_default();
    env::set_var("PATH", format!("{}:{path}", dir.path().display()));

    let first = thread::spawn(terminal::reset);
    thread::sleep(Duration::from_millis(200));

    terminal::reset();
    assert!(marker.exists(), "reset returned while the first one was still running");
    assert!(terminal::reset_done());

    first.join().unwrap();
}

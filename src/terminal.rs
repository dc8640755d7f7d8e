// ABOUTME: Terminal lifecycle: raw mode setup, a run-once reset, signal and panic cleanup

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::sync::Once;

use crossterm::{
    cursor::{MoveTo, Show},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::{error, info};

static RESET: Once = Once::new();

/// Enter raw mode and the alternate screen.
pub fn setup() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Put the terminal back the way the shell expects it.
///
/// Only the first call does anything, so every exit path can call it. A call
/// made while another thread is still resetting blocks until that reset is
/// finished.
pub fn reset() {
    RESET.call_once(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            LeaveAlternateScreen,
            Show,
            Clear(ClearType::All),
            MoveTo(0, 0)
        );
        let _ = stdout.flush();

        // stty needs the controlling terminal on stdin
        let _ = Command::new("stty")
            .arg("sane")
            .stdin(Stdio::inherit())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    });
}

pub fn reset_done() -> bool {
    RESET.is_completed()
}

/// Resets the terminal when dropped.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        reset();
    }
}

/// Reset the terminal and exit on SIGINT, SIGTERM or SIGHUP.
pub fn spawn_signal_listener() -> io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigint.recv() => info!("Received SIGINT, resetting terminal"),
            _ = sigterm.recv() => info!("Received SIGTERM, resetting terminal"),
            _ = sighup.recv() => info!("Received SIGHUP, resetting terminal"),
        }
        reset();
        std::process::exit(0);
    });
    Ok(())
}

pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Terminal must be usable before the message is printed
        reset();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}

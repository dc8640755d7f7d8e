// ABOUTME: Error types for tmux session management
// Defines the failures a gateway call can report back to the menu

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    /// The tmux process could not be started or exited with a failure status.
    #[error("{action} failed: {reason}")]
    ExecutionFailed { action: &'static str, reason: String },

    /// The named session was not in the listing at attach time.
    #[error("tmux session '{0}' does not exist")]
    SessionNotFound(String),

    /// The tmux executable could not be located on the search path.
    #[error("{0} not found in PATH")]
    TmuxNotInstalled(String),
}

impl TmuxError {
    pub(crate) fn execution(action: &'static str, reason: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            action,
            reason: reason.into(),
        }
    }
}

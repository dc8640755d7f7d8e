// ABOUTME: Host-based tmux session management
// Drives the tmux command line to create, list, attach to and kill sessions

pub mod error;
pub mod gateway;

pub use error::TmuxError;
pub use gateway::{SessionGateway, TmuxGateway};

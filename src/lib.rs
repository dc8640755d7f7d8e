// ABOUTME: Library crate for the kiosk terminal session portal exposing its API for testing

pub mod app;
pub mod components;
pub mod config;
pub mod terminal;
pub mod tmux;

// ABOUTME: Menu state machine: screens, cursor model and keyboard-driven transitions

pub mod events;
pub mod menu;
pub mod state;

pub use events::{AppCommand, AppEvent, EventHandler};
pub use menu::{MenuAction, MenuItem, MenuModel};
pub use state::{
    AppState, ListAction, MenuSettings, OutcomeLog, Screen, SelectionListState, TextInputState,
};

// ABOUTME: UI components: the pure screen projection, the theme and the ratatui layout

pub mod layout;
pub mod screen;
pub mod theme;

pub use layout::LayoutComponent;
pub use screen::{ContentLine, ScreenContent};
pub use theme::Theme;

// ABOUTME: Immutable colour theme handed to the layout component at construction

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

use crate::config::ThemeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub cursor: Color,
    pub selected: Color,
    pub input_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0x00, 0xd9, 0xff),
            text: Color::Rgb(0xbb, 0xbb, 0xbb),
            cursor: Color::Rgb(0x00, 0xff, 0xd9),
            selected: Color::Rgb(0xc2, 0xf0, 0xfc),
            input_background: Color::Rgb(0x33, 0x33, 0x33),
        }
    }
}

impl Theme {
    /// Build from config, keeping the default for any colour that does not parse.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = Self::default();
        Self {
            accent: parse_color(&config.accent, defaults.accent),
            text: parse_color(&config.text, defaults.text),
            cursor: parse_color(&config.cursor, defaults.cursor),
            selected: parse_color(&config.selected, defaults.selected),
            input_background: parse_color(&config.input_background, defaults.input_background),
        }
    }

    pub fn header(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn cursor(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    pub fn highlighted(&self) -> Style {
        Style::default().fg(self.selected).add_modifier(Modifier::BOLD)
    }

    pub fn input(&self) -> Style {
        Style::default().fg(self.text).bg(self.input_background)
    }

    pub fn footer(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::ITALIC)
    }
}

fn parse_color(value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        warn!("Ignoring unknown colour '{}'", value);
        fallback
    })
}

// ABOUTME: Main layout component drawing the current screen with header, body and footer

use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph},
};

use super::screen::{ContentLine, ScreenContent, BLANK_MARKER, CURSOR_MARKER, INPUT_CURSOR};
use super::Theme;
use crate::app::AppState;

pub struct LayoutComponent {
    theme: Theme,
}

impl LayoutComponent {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let content = ScreenContent::from_state(state);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Entries
                Constraint::Length(2), // Footer
            ])
            .split(frame.size());

        let header = Paragraph::new(content.header())
            .style(self.theme.header())
            .block(Block::default().padding(Padding::new(4, 4, 1, 1)));
        frame.render_widget(header, chunks[0]);

        let body = Paragraph::new(self.body_lines(&content))
            .block(Block::default().padding(Padding::horizontal(4)));
        frame.render_widget(body, chunks[1]);

        let footer = Paragraph::new(content.footer.as_str())
            .style(self.theme.footer())
            .block(Block::default().padding(Padding::horizontal(4)));
        frame.render_widget(footer, chunks[2]);
    }

    fn body_lines(&self, content: &ScreenContent) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = content
            .lines
            .iter()
            .map(|line| match line {
                ContentLine::Item { text, highlighted: true } => Line::from(vec![
                    Span::styled(CURSOR_MARKER, self.theme.cursor()),
                    Span::styled(text.clone(), self.theme.highlighted()),
                ]),
                ContentLine::Item { text, highlighted: false } => {
                    Line::from(format!("{BLANK_MARKER}{text}"))
                }
                ContentLine::Text(text) => Line::from(text.clone()),
                ContentLine::Input(value) => Line::from(Span::styled(
                    format!(" {value}{INPUT_CURSOR} "),
                    self.theme.input(),
                )),
            })
            .collect();

        for extra in [&content.hint, &content.status].into_iter().flatten() {
            lines.push(Line::default());
            lines.push(Line::from(extra.clone()));
        }
        lines
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

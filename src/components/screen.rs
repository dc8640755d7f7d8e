// ABOUTME: Pure projection of the app state into the text shown on screen
// The layout component styles this content; tests assert on it directly

use crate::app::state::{InputAction, ListAction, SelectionListState, TextInputState};
use crate::app::{AppState, Screen};

pub const HEADER_PREFIX: &str = "📟 KIOSK // ";
pub const CURSOR_MARKER: &str = "▶ ";
pub const BLANK_MARKER: &str = "   ";
pub const INPUT_CURSOR: &str = "█";

const MENU_FOOTER: &str = "↑ ↓ to navigate  •  ⏎ to launch  •  q to quit";
const INPUT_FOOTER: &str = "Enter to confirm • Esc to cancel";
const LIST_FOOTER: &str = "↑ ↓ to navigate  •  ⏎ to select  •  Esc to go back";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLine {
    /// Selectable or listed entry; `highlighted` marks the cursor position.
    Item { text: String, highlighted: bool },
    /// Free text such as prompts and placeholder messages.
    Text(String),
    /// The text input box, without the block cursor.
    Input(String),
}

impl ContentLine {
    pub fn to_text(&self) -> String {
        match self {
            Self::Item { text, highlighted } => {
                let marker = if *highlighted { CURSOR_MARKER } else { BLANK_MARKER };
                format!("{marker}{text}")
            }
            Self::Text(text) => text.clone(),
            Self::Input(value) => format!("{value}{INPUT_CURSOR}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContent {
    pub title: String,
    pub lines: Vec<ContentLine>,
    pub hint: Option<String>,
    pub status: Option<String>,
    pub footer: String,
}

impl ScreenContent {
    pub fn from_state(state: &AppState) -> Self {
        match &state.screen {
            Screen::MainMenu => Self::menu("Terminal Session Portal", state),
            Screen::SubMenu => Self::menu("Manage Tmux Sessions", state),
            Screen::TextInput(input) => Self::text_input(input),
            Screen::SelectionList(list) => Self::selection_list(list),
        }
    }

    pub fn header(&self) -> String {
        format!("{HEADER_PREFIX}{}", self.title)
    }

    /// Plain text block: header, entries, hint, status and footer.
    pub fn to_text(&self) -> String {
        let mut out = self.header();
        out.push_str("\n\n");
        for line in &self.lines {
            out.push_str(&line.to_text());
            out.push('\n');
        }
        if let Some(hint) = &self.hint {
            out.push('\n');
            out.push_str(hint);
            out.push('\n');
        }
        if let Some(status) = &self.status {
            out.push('\n');
            out.push_str(status);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.footer);
        out
    }

    fn menu(title: &str, state: &AppState) -> Self {
        let cursor = state.menu.cursor();
        let lines = state
            .menu
            .labels()
            .enumerate()
            .map(|(idx, label)| ContentLine::Item {
                text: label.to_string(),
                highlighted: idx == cursor,
            })
            .collect();
        Self {
            title: title.to_string(),
            lines,
            hint: None,
            status: state.last_outcome(),
            footer: MENU_FOOTER.to_string(),
        }
    }

    fn text_input(input: &TextInputState) -> Self {
        let (title, prompt) = match input.action {
            InputAction::CreateSession => {
                ("Create New Tmux Session", "Enter a name for the new session")
            }
        };
        Self {
            title: title.to_string(),
            lines: vec![
                ContentLine::Text(format!("{prompt}:")),
                ContentLine::Input(input.value.clone()),
            ],
            hint: None,
            status: None,
            footer: INPUT_FOOTER.to_string(),
        }
    }

    fn selection_list(list: &SelectionListState) -> Self {
        let (title, verb) = match list.action {
            ListAction::List => ("Tmux Sessions", None),
            ListAction::Attach => ("Select Session to Attach", Some("attach to")),
            ListAction::Kill => ("Select Session to Kill", Some("kill")),
        };

        let (lines, hint) = if list.is_placeholder() {
            let message = list
                .items
                .first()
                .cloned()
                .unwrap_or_else(|| crate::app::state::NO_SESSIONS.to_string());
            (vec![ContentLine::Text(message)], None)
        } else {
            let lines = list
                .items
                .iter()
                .enumerate()
                .map(|(idx, name)| ContentLine::Item {
                    text: name.clone(),
                    highlighted: list.selected == Some(idx),
                })
                .collect();
            (lines, verb.map(|verb| format!("Press Enter to {verb} selected session")))
        };

        Self {
            title: title.to_string(),
            lines,
            hint,
            status: None,
            footer: LIST_FOOTER.to_string(),
        }
    }
}

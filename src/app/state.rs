// ABOUTME: Application state for the kiosk menus, text input and session selection screens

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::app::menu::MenuModel;
use crate::tmux::TmuxError;

/// Shown in place of session names when the listing is empty.
pub const NO_SESSIONS: &str = "No active tmux sessions";
/// Prefix of the entry shown in place of session names when listing failed.
pub const LIST_ERROR_PREFIX: &str = "Error";

/// Menu settings that survive every reset of the menu model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSettings {
    pub primary_session: String,
    pub launchers: Vec<String>,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            primary_session: "dev-session".to_string(),
            launchers: vec![
                "📡  Attach to Logs".to_string(),
                "🗃️  Launch Notes Panel".to_string(),
                "🧼  Clean Workspace".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    CreateSession,
}

/// Text typed on the input screen. Created fresh every time the screen opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputState {
    pub action: InputAction,
    pub value: String,
    pub complete: bool,
    pub cancelled: bool,
}

impl TextInputState {
    pub fn new(action: InputAction) -> Self {
        Self {
            action,
            value: String::new(),
            complete: false,
            cancelled: false,
        }
    }
}

/// Session menu entry that opened the selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    List,
    Attach,
    Kill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionListState {
    pub action: ListAction,
    pub items: Vec<String>,
    /// `None` means nothing has been selected yet.
    pub selected: Option<usize>,
}

impl SelectionListState {
    /// Build the list from a listing result. Attach and kill start on the
    /// first entry, a plain listing starts with no selection.
    pub fn from_listing(action: ListAction, listing: Result<Vec<String>, TmuxError>) -> Self {
        let items = match listing {
            Ok(sessions) if sessions.is_empty() => vec![NO_SESSIONS.to_string()],
            Ok(sessions) => sessions,
            Err(e) => vec![format!("{LIST_ERROR_PREFIX} listing sessions: {e}")],
        };
        let selected = match action {
            ListAction::List => None,
            ListAction::Attach | ListAction::Kill => Some(0),
        };
        Self {
            action,
            items,
            selected,
        }
    }

    /// True when the entries are a placeholder message rather than sessions.
    pub fn is_placeholder(&self) -> bool {
        self.items
            .first()
            .map_or(true, |first| first == NO_SESSIONS || first.starts_with(LIST_ERROR_PREFIX))
    }

    /// The session Enter would act on, if any.
    pub fn chosen(&self) -> Option<&str> {
        if self.is_placeholder() {
            return None;
        }
        self.selected
            .and_then(|idx| self.items.get(idx))
            .map(String::as_str)
    }

    pub fn move_up(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some(idx.saturating_sub(1));
        }
    }

    pub fn move_down(&mut self) {
        let next = self.selected.map_or(0, |idx| idx + 1);
        if next < self.items.len() {
            self.selected = Some(next);
        }
    }
}

/// The active screen. Input and selection state live inside their screen
/// and are dropped when it is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    SubMenu,
    TextInput(TextInputState),
    SelectionList(SelectionListState),
}

#[derive(Debug, Default)]
struct OutcomeEntries {
    messages: Vec<String>,
    written: usize,
}

/// Messages for the user, in the order they happened.
///
/// Clones share the same entries, so whoever hands the terminal back to the
/// shell can print what the menu recorded, including right before attach
/// replaces the process.
#[derive(Debug, Clone, Default)]
pub struct OutcomeLog {
    inner: Arc<Mutex<OutcomeEntries>>,
}

impl OutcomeLog {
    fn lock(&self) -> MutexGuard<'_, OutcomeEntries> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, outcome: String) {
        self.lock().messages.push(outcome);
    }

    pub fn entries(&self) -> Vec<String> {
        self.lock().messages.clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lock().messages.last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().messages.is_empty()
    }

    /// Write the entries not written yet, one per line.
    pub fn write_pending(&self, out: &mut impl Write) -> io::Result<()> {
        let mut entries = self.lock();
        for message in &entries.messages[entries.written..] {
            writeln!(out, "{message}")?;
        }
        out.flush()?;
        entries.written = entries.messages.len();
        Ok(())
    }

    pub fn print_pending(&self) {
        let _ = self.write_pending(&mut io::stdout().lock());
    }
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub menu: MenuModel,
    pub outcomes: OutcomeLog,
    settings: MenuSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MenuSettings::default())
    }
}

impl AppState {
    pub fn new(settings: MenuSettings) -> Self {
        Self::with_outcome_log(settings, OutcomeLog::default())
    }

    /// State that records into `outcomes`, which the caller may share.
    pub fn with_outcome_log(settings: MenuSettings, outcomes: OutcomeLog) -> Self {
        Self {
            screen: Screen::MainMenu,
            menu: MenuModel::main_menu(&settings.launchers),
            outcomes,
            settings,
        }
    }

    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    pub fn show_main_menu(&mut self) {
        debug!("Switching to main menu");
        self.screen = Screen::MainMenu;
        self.menu = MenuModel::main_menu(&self.settings.launchers);
    }

    pub fn show_session_menu(&mut self) {
        debug!("Switching to session menu");
        self.screen = Screen::SubMenu;
        self.menu = MenuModel::session_menu();
    }

    pub fn record(&mut self, outcome: impl Into<String>) {
        let outcome = outcome.into();
        info!("{}", outcome);
        self.outcomes.push(outcome);
    }

    pub fn last_outcome(&self) -> Option<String> {
        self.outcomes.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sessions(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_list_starts_without_selection() {
        let list = SelectionListState::from_listing(ListAction::List, Ok(sessions(&["a"])));
        assert_eq!(list.selected, None);
        assert_eq!(list.chosen(), None);
    }

    #[test]
    fn test_attach_and_kill_preselect_first_entry() {
        for action in [ListAction::Attach, ListAction::Kill] {
            let list = SelectionListState::from_listing(action, Ok(sessions(&["a", "b"])));
            assert_eq!(list.selected, Some(0));
            assert_eq!(list.chosen(), Some("a"));
        }
    }

    #[test]
    fn test_empty_listing_becomes_placeholder() {
        let list = SelectionListState::from_listing(ListAction::Attach, Ok(Vec::new()));
        assert_eq!(list.items, vec![NO_SESSIONS]);
        assert!(list.is_placeholder());
        assert_eq!(list.chosen(), None);
    }

    #[test]
    fn test_failed_listing_becomes_error_entry() {
        let err = TmuxError::execution("list-sessions", "boom");
        let list = SelectionListState::from_listing(ListAction::Kill, Err(err));
        assert_eq!(list.items, vec!["Error listing sessions: list-sessions failed: boom"]);
        assert!(list.is_placeholder());
    }

    #[test]
    fn test_selection_clamps_without_wrapping() {
        let mut list =
            SelectionListState::from_listing(ListAction::Kill, Ok(sessions(&["a", "b", "c"])));
        list.move_up();
        assert_eq!(list.selected, Some(0));
        for _ in 0..10 {
            list.move_down();
        }
        assert_eq!(list.selected, Some(2));
    }

    #[test]
    fn test_down_from_no_selection_picks_first() {
        let mut list =
            SelectionListState::from_listing(ListAction::List, Ok(sessions(&["a", "b"])));
        list.move_up();
        assert_eq!(list.selected, None);
        list.move_down();
        assert_eq!(list.selected, Some(0));
    }

    #[test]
    fn test_resets_put_cursor_back_at_top() {
        let mut state = AppState::default();
        state.menu.move_down();
        state.show_session_menu();
        assert_eq!(state.screen, Screen::SubMenu);
        assert_eq!(state.menu.cursor(), 0);

        state.menu.move_down();
        state.show_main_menu();
        assert_eq!(state.screen, Screen::MainMenu);
        assert_eq!(state.menu.cursor(), 0);
    }

    #[test]
    fn test_shared_outcome_log_sees_recorded_outcomes() {
        let log = OutcomeLog::default();
        let mut state = AppState::with_outcome_log(MenuSettings::default(), log.clone());

        state.record("Tmux session 'dev' created successfully.");

        assert_eq!(log.entries(), vec!["Tmux session 'dev' created successfully."]);
        assert_eq!(log.entries(), state.outcomes.entries());
    }

    #[test]
    fn test_pending_outcomes_are_written_once() {
        let log = OutcomeLog::default();
        log.push("first".to_string());

        let mut out = Vec::new();
        log.write_pending(&mut out).unwrap();
        log.push("second".to_string());
        log.write_pending(&mut out).unwrap();
        log.write_pending(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "first\nsecond\n");
    }
}

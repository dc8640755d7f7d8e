// ABOUTME: Event handling system mapping keyboard input to menu transitions and session commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::app::menu::MenuAction;
use crate::app::state::{
    AppState, InputAction, ListAction, Screen, SelectionListState, TextInputState,
};
use crate::tmux::SessionGateway;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    MoveUp,
    MoveDown,
    Select,
    Cancel,
    InputChar(char),
    InputBackspace,
}

/// Side effect requested by a transition, applied by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }

        match state.screen {
            Screen::TextInput(_) => Self::handle_text_input_keys(key_event),
            Screen::SelectionList(_) => Self::handle_selection_list_keys(key_event),
            Screen::MainMenu | Screen::SubMenu => Self::handle_menu_keys(key_event),
        }
    }

    fn is_interrupt(key_event: KeyEvent) -> bool {
        key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_menu_keys(key_event: KeyEvent) -> Option<AppEvent> {
        if Self::is_interrupt(key_event) {
            return Some(AppEvent::Quit);
        }
        match key_event.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::MoveUp),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::MoveDown),
            KeyCode::Enter => Some(AppEvent::Select),
            _ => None,
        }
    }

    fn handle_text_input_keys(key_event: KeyEvent) -> Option<AppEvent> {
        if Self::is_interrupt(key_event) {
            return Some(AppEvent::Cancel);
        }
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Cancel),
            KeyCode::Enter => Some(AppEvent::Select),
            KeyCode::Backspace | KeyCode::Delete => Some(AppEvent::InputBackspace),
            KeyCode::Char(ch)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(AppEvent::InputChar(ch))
            }
            _ => None,
        }
    }

    fn handle_selection_list_keys(key_event: KeyEvent) -> Option<AppEvent> {
        if Self::is_interrupt(key_event) {
            return Some(AppEvent::Cancel);
        }
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Cancel),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::MoveUp),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::MoveDown),
            KeyCode::Enter => Some(AppEvent::Select),
            _ => None,
        }
    }

    /// Apply one event to the state. Gateway calls happen inline and block
    /// until the tmux process finishes.
    pub fn process_event(
        event: AppEvent,
        state: &mut AppState,
        gateway: &dyn SessionGateway,
    ) -> Option<AppCommand> {
        debug!("Processing {:?} on {:?}", event, state.screen);
        match state.screen {
            Screen::MainMenu | Screen::SubMenu => Self::process_menu_event(event, state, gateway),
            Screen::TextInput(_) => Self::process_text_input_event(event, state, gateway),
            Screen::SelectionList(_) => Self::process_selection_list_event(event, state, gateway),
        }
    }

    fn process_menu_event(
        event: AppEvent,
        state: &mut AppState,
        gateway: &dyn SessionGateway,
    ) -> Option<AppCommand> {
        match event {
            AppEvent::Quit => return Some(AppCommand::Quit),
            AppEvent::MoveUp => state.menu.move_up(),
            AppEvent::MoveDown => state.menu.move_down(),
            AppEvent::Select => {
                let item = state.menu.selected()?.clone();
                match item.action {
                    MenuAction::StartPrimarySession => {
                        let name = state.settings().primary_session.clone();
                        Self::create_and_attach(&name, state, gateway);
                        return Some(AppCommand::Quit);
                    }
                    MenuAction::Launch => {
                        state.record(format!("Launching: {}", item.label));
                        return Some(AppCommand::Quit);
                    }
                    MenuAction::Exit => return Some(AppCommand::Quit),
                    MenuAction::ManageSessions => state.show_session_menu(),
                    MenuAction::BackToMain => state.show_main_menu(),
                    MenuAction::CreateSession => {
                        let input = TextInputState::new(InputAction::CreateSession);
                        state.screen = Screen::TextInput(input);
                    }
                    MenuAction::ListSessions => {
                        Self::open_selection_list(ListAction::List, state, gateway);
                    }
                    MenuAction::AttachSession => {
                        Self::open_selection_list(ListAction::Attach, state, gateway);
                    }
                    MenuAction::KillSession => {
                        Self::open_selection_list(ListAction::Kill, state, gateway);
                    }
                }
            }
            AppEvent::Cancel | AppEvent::InputChar(_) | AppEvent::InputBackspace => {}
        }
        None
    }

    fn process_text_input_event(
        event: AppEvent,
        state: &mut AppState,
        gateway: &dyn SessionGateway,
    ) -> Option<AppCommand> {
        let Screen::TextInput(input) = &mut state.screen else {
            return None;
        };

        match event {
            AppEvent::InputChar(ch) => input.value.push(ch),
            AppEvent::InputBackspace => {
                input.value.pop();
            }
            AppEvent::Cancel | AppEvent::Quit => {
                input.cancelled = true;
                state.show_session_menu();
            }
            AppEvent::Select => {
                if input.value.is_empty() {
                    return None;
                }
                input.complete = true;
                let action = input.action;
                let name = input.value.clone();
                match action {
                    InputAction::CreateSession => Self::create_and_attach(&name, state, gateway),
                }
                return Some(AppCommand::Quit);
            }
            AppEvent::MoveUp | AppEvent::MoveDown => {}
        }
        None
    }

    fn process_selection_list_event(
        event: AppEvent,
        state: &mut AppState,
        gateway: &dyn SessionGateway,
    ) -> Option<AppCommand> {
        let Screen::SelectionList(list) = &mut state.screen else {
            return None;
        };

        match event {
            AppEvent::MoveUp => list.move_up(),
            AppEvent::MoveDown => list.move_down(),
            AppEvent::Cancel | AppEvent::Quit => state.show_session_menu(),
            AppEvent::Select => {
                let action = list.action;
                let Some(name) = list.chosen().map(str::to_owned) else {
                    state.show_session_menu();
                    return None;
                };
                match action {
                    ListAction::Attach => {
                        state.record(format!("Attaching to session: {name}"));
                        if let Err(e) = gateway.attach_session(&name) {
                            state.record(format!("Error attaching to tmux session: {e}"));
                        }
                        return Some(AppCommand::Quit);
                    }
                    ListAction::Kill => {
                        match gateway.kill_session(&name) {
                            Ok(()) => {
                                state.record(format!("Tmux session '{name}' killed successfully."));
                            }
                            Err(e) => state.record(format!("Error killing tmux session: {e}")),
                        }
                        state.show_session_menu();
                    }
                    ListAction::List => state.show_session_menu(),
                }
            }
            AppEvent::InputChar(_) | AppEvent::InputBackspace => {}
        }
        None
    }

    fn open_selection_list(action: ListAction, state: &mut AppState, gateway: &dyn SessionGateway) {
        let listing = gateway.list_sessions();
        state.screen = Screen::SelectionList(SelectionListState::from_listing(action, listing));
    }

    /// Create `name` and, if that worked, hand the terminal over to it.
    fn create_and_attach(name: &str, state: &mut AppState, gateway: &dyn SessionGateway) {
        match gateway.create_session(name) {
            Ok(()) => {
                state.record(format!("Tmux session '{name}' created successfully."));
                if let Err(e) = gateway.attach_session(name) {
                    state.record(format!("Error attaching to tmux session: {e}"));
                }
            }
            Err(e) => state.record(format!("Error creating tmux session: {e}")),
        }
    }
}

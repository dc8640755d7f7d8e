// ABOUTME: Test UI display of each screen through the ratatui test backend

use kiosk::app::state::InputAction;
use kiosk::app::{AppState, ListAction, Screen, SelectionListState, TextInputState};
use kiosk::components::{LayoutComponent, ScreenContent, Theme};
use ratatui::{backend::TestBackend, Terminal};

fn render(state: &AppState) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    let layout = LayoutComponent::new(Theme::default());

    terminal.draw(|frame| layout.render(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_main_menu_shows_header_entries_and_footer() {
    let state = AppState::default();
    let content = render(&state);

    assert!(content.contains("KIOSK // Terminal Session Portal"), "missing header: {content}");
    assert!(content.contains("Start Dev Session"));
    assert!(content.contains("Manage Tmux Sessions"));
    assert!(content.contains("Exit"));
    assert!(content.contains("q to quit"));
}

#[test]
fn test_text_input_shows_typed_name() {
    let mut input = TextInputState::new(InputAction::CreateSession);
    input.value.push_str("demo");
    let mut state = AppState::default();
    state.screen = Screen::TextInput(input);

    let content = render(&state);
    assert!(content.contains("Create New Tmux Session"));
    assert!(content.contains("Enter a name for the new session:"));
    assert!(content.contains("demo█"));
    assert!(content.contains("Esc to cancel"));
}

#[test]
fn test_kill_list_shows_sessions_and_hint() {
    let mut state = AppState::default();
    state.screen = Screen::SelectionList(SelectionListState::from_listing(
        ListAction::Kill,
        Ok(vec!["alpha".to_string(), "beta".to_string()]),
    ));

    let content = render(&state);
    assert!(content.contains("Select Session to Kill"));
    assert!(content.contains("▶ alpha"));
    assert!(content.contains("   beta"));
    assert!(content.contains("Press Enter to kill selected session"));
    assert!(content.contains("Esc to go back"));
}

#[test]
fn test_session_menu_shows_last_outcome() {
    let mut state = AppState::default();
    state.show_session_menu();
    state.record("Tmux session 'alpha' killed successfully.");

    let content = render(&state);
    assert!(content.contains("Manage Tmux Sessions"));
    assert!(content.contains("Tmux session 'alpha' killed successfully."));
}

#[test]
fn test_rendered_lines_follow_screen_content() {
    let mut state = AppState::default();
    state.show_session_menu();
    let content = render(&state);

    for line in ScreenContent::from_state(&state).lines {
        let text = line.to_text();
        let ascii: String = text.chars().filter(char::is_ascii_alphabetic).collect();
        let rendered: String = content.chars().filter(char::is_ascii_alphabetic).collect();
        assert!(rendered.contains(&ascii), "'{text}' not rendered");
    }
}

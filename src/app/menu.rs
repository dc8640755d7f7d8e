// ABOUTME: Menu entries for the main and session menus plus the cursor model over them

/// What selecting a menu entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    StartPrimarySession,
    Launch,
    ManageSessions,
    Exit,
    CreateSession,
    ListSessions,
    AttachSession,
    KillSession,
    BackToMain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Labels for the active menu and a cursor that always points at one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    items: Vec<MenuItem>,
    cursor: usize,
}

impl MenuModel {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items, cursor: 0 }
    }

    /// Main menu: primary session, launchers, session management, exit.
    pub fn main_menu(launchers: &[String]) -> Self {
        let mut items = vec![MenuItem::new(
            "💾  Start Dev Session",
            MenuAction::StartPrimarySession,
        )];
        items.extend(
            launchers
                .iter()
                .map(|label| MenuItem::new(label.clone(), MenuAction::Launch)),
        );
        items.push(MenuItem::new("📂  Manage Tmux Sessions", MenuAction::ManageSessions));
        items.push(MenuItem::new("🚪  Exit", MenuAction::Exit));
        Self::new(items)
    }

    pub fn session_menu() -> Self {
        Self::new(vec![
            MenuItem::new("➕  Create New Session", MenuAction::CreateSession),
            MenuItem::new("📜  List Sessions", MenuAction::ListSessions),
            MenuItem::new("🔗  Attach to Session", MenuAction::AttachSession),
            MenuItem::new("❌  Kill Session", MenuAction::KillSession),
            MenuItem::new("⬅️  Back to Main Menu", MenuAction::BackToMain),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.label.as_str())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&MenuItem> {
        self.items.get(self.cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_places_launchers_before_management() {
        let launchers = vec!["📡  Attach to Logs".to_string()];
        let menu = MenuModel::main_menu(&launchers);
        let actions: Vec<_> = menu.items().iter().map(|i| i.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                MenuAction::StartPrimarySession,
                MenuAction::Launch,
                MenuAction::ManageSessions,
                MenuAction::Exit,
            ]
        );
        assert_eq!(menu.cursor(), 0);
    }

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let mut menu = MenuModel::session_menu();
        menu.move_up();
        assert_eq!(menu.cursor(), 0);

        for _ in 0..20 {
            menu.move_down();
        }
        assert_eq!(menu.cursor(), menu.items().len() - 1);
        assert_eq!(menu.selected().map(|i| &i.action), Some(&MenuAction::BackToMain));
    }

    #[test]
    fn test_empty_menu_has_no_selection() {
        let mut menu = MenuModel::new(Vec::new());
        menu.move_down();
        assert_eq!(menu.cursor(), 0);
        assert!(menu.selected().is_none());
    }
}

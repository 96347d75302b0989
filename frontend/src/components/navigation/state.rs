/// Visibility of the narrow-screen menu. Closed on every mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Menu button pressed.
    Toggle,
    /// A link or the logo was followed.
    Select,
}

impl MenuState {
    /// Applies `action`, returning whether the menu changed.
    pub fn apply(&mut self, action: MenuAction) -> bool {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Select => false,
        };
        let changed = open != self.open;
        self.open = open;
        changed
    }
}

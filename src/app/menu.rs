//! Mobile menu state.

/// Open/closed state of the nav overlay. The rendered toggle marker mirrors
/// `expanded` (the aria-expanded analog), and body scroll is locked exactly
/// while the menu is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    expanded: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.expanded
    }

    /// Scroll lock is derived, so it cannot drift from the open flag.
    pub fn scroll_locked(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn close(&mut self) {
        self.expanded = false;
    }
}

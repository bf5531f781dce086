#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Layout state shared through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    /// Expanded sidebar shows labels; collapsed shows icons only.
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

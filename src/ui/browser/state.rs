use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowserState {
    /// Index into the flattened story list.
    pub selected: usize,
    /// Number of stories in the catalog.
    pub len: usize,
    /// Status line for the last click, if any.
    pub last_action: Option<String>,
}

impl UiState for BrowserState {}

impl BrowserState {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BrowserIntent {
    /// Catalog attached. `selected` is clamped to the list.
    Load { len: usize, selected: usize },
    MoveUp,
    MoveDown,
    Select(usize),
    /// The rendered story was clicked. `handled` is whether a handler ran.
    Clicked { story: String, handled: bool },
}

impl Intent for BrowserIntent {}

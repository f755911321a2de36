use crate::ui::browser::intent::BrowserIntent;
use crate::ui::browser::state::BrowserState;
use crate::ui::mvi::Reducer;

pub struct BrowserReducer;

fn clamp(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

impl Reducer for BrowserReducer {
    type State = BrowserState;
    type Intent = BrowserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowserIntent::Load { len, selected } => BrowserState {
                selected: clamp(selected, len),
                len,
                last_action: None,
            },
            BrowserIntent::MoveUp => {
                if state.is_empty() {
                    return state;
                }
                let selected = if state.selected == 0 {
                    state.len - 1
                } else {
                    state.selected - 1
                };
                BrowserState { selected, ..state }
            }
            BrowserIntent::MoveDown => {
                if state.is_empty() {
                    return state;
                }
                let selected = if state.selected + 1 >= state.len {
                    0
                } else {
                    state.selected + 1
                };
                BrowserState { selected, ..state }
            }
            BrowserIntent::Select(index) => BrowserState {
                selected: clamp(index, state.len),
                ..state
            },
            BrowserIntent::Clicked { story, handled } => {
                let message = if handled {
                    format!("Clicked {story}")
                } else {
                    format!("Clicked {story} (no handler)")
                };
                BrowserState {
                    last_action: Some(message),
                    ..state
                }
            }
        }
    }
}

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::BrowserConfig;
use crate::ui::browser::{BrowserIntent, BrowserReducer, BrowserState};
use crate::ui::mvi::Reducer;
use std::time::Duration;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    tick_rate: Duration,
    show_sidebar: bool,
    catalog: Catalog,
    /// Story selection (MVI pattern).
    browser: BrowserState,
}

impl App {
    pub fn new(catalog: Catalog, config: &BrowserConfig) -> Self {
        let selected = match config.initial_story.as_deref() {
            Some(label) => catalog.position(label).unwrap_or_else(|| {
                tracing::warn!(story = label, "Initial story not found, starting at the top");
                0
            }),
            None => 0,
        };

        let mut app = Self {
            should_quit: false,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            show_sidebar: config.show_sidebar,
            browser: BrowserState::default(),
            catalog,
        };
        let len = app.catalog.len();
        app.dispatch(BrowserIntent::Load { len, selected });
        app
    }

    pub fn dispatch(&mut self, intent: BrowserIntent) {
        dispatch_mvi!(self, browser, BrowserReducer, intent);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn browser(&self) -> &BrowserState {
        &self.browser
    }

    pub fn selected_entry(&self) -> Option<CatalogEntry<'_>> {
        self.catalog.entry(self.browser.selected)
    }

    /// Renders the selected story and clicks it.
    pub fn press(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        let story = entry.path();
        let handled = entry.story.render().click();
        tracing::info!(story = %story, handled, "Story clicked");
        self.dispatch(BrowserIntent::Clicked { story, handled });
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn show_sidebar(&self) -> bool {
        self.show_sidebar
    }

    pub fn toggle_sidebar(&mut self) {
        self.show_sidebar = !self.show_sidebar;
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

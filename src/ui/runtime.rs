use crate::catalog::Catalog;
use crate::config::BrowserConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Runs the interactive browser until the user quits.
pub fn run(catalog: Catalog, config: &BrowserConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(catalog, config);
    let tick_rate = app.tick_rate();
    let events = EventHandler::new(tick_rate);
    tracing::info!(stories = app.catalog().len(), "Story browser started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize) | Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Story browser stopped");
    Ok(())
}

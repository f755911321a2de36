use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{inset, layout_regions, split_body};
use crate::ui::sidebar::Sidebar;
use crate::ui::theme::{GLOBAL_BORDER, GROUP_TEXT, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let selected = app.selected_entry();
    let selected_path = selected.map(|entry| entry.path());

    frame.render_widget(
        Header::new().widget(app.catalog().len(), selected_path.as_deref()),
        header,
    );
    frame.render_widget(Clear, body);

    let (sidebar, canvas) = split_body(body, app.show_sidebar());
    if let Some(sidebar) = sidebar {
        let widget = Sidebar::new(app.catalog(), app.browser().selected).widget();
        frame.render_widget(widget, sidebar);
    }

    let block = Block::default()
        .title(Span::styled(
            selected.map(|entry| entry.story.label()).unwrap_or("No stories"),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(canvas);
    frame.render_widget(block, canvas);

    match selected {
        Some(entry) => {
            let stage = inset(inner, 1);
            let button = entry.story.render();
            frame.render_widget(&button, stage);
        }
        None => {
            let hint = Paragraph::new("Register stories to see them here.")
                .style(Style::default().fg(GROUP_TEXT));
            frame.render_widget(hint, inset(inner, 1));
        }
    }

    if let Some(message) = app.browser().last_action.as_deref() {
        if inner.height > 0 {
            let status = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            let line = Line::from(Span::styled(
                format!(" {message}"),
                Style::default().fg(GROUP_TEXT).add_modifier(Modifier::DIM),
            ));
            frame.render_widget(Paragraph::new(line), status);
        }
    }

    frame.render_widget(Footer, footer);
}

use crate::ui::theme::{BROWSER_ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// `story_count` stories, `selected` is the `Group/Label` path on screen.
    pub fn widget(&self, story_count: usize, selected: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default()
            .fg(BROWSER_ACCENT)
            .add_modifier(Modifier::BOLD);
        let noun = if story_count == 1 { "story" } else { "stories" };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("buttonbook", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{story_count} {noun}"), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(selected.unwrap_or("-").to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

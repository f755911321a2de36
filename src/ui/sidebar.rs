use crate::catalog::Catalog;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BROWSER_ACCENT, GLOBAL_BORDER, GROUP_TEXT, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Story tree: each group name followed by its indented labels.
pub struct Sidebar<'a> {
    catalog: &'a Catalog,
    selected: usize,
}

impl<'a> Sidebar<'a> {
    pub fn new(catalog: &'a Catalog, selected: usize) -> Self {
        Self { catalog, selected }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let group_style = Style::default().fg(GROUP_TEXT).add_modifier(Modifier::BOLD);
        let story_style = Style::default().fg(HEADER_TEXT);
        let active_style = Style::default().fg(BROWSER_ACCENT).bg(ACTIVE_HIGHLIGHT);

        let mut lines = Vec::new();
        let mut index = 0;
        for group in self.catalog.groups() {
            lines.push(Line::from(Span::styled(group.name(), group_style)));
            for story in group.stories() {
                let (marker, style) = if index == self.selected {
                    ("▸ ", active_style)
                } else {
                    ("  ", story_style)
                };
                lines.push(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(story.label(), style),
                ]));
                index += 1;
            }
        }
        lines
    }

    pub fn widget(&self) -> Paragraph<'a> {
        Paragraph::new(self.lines()).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

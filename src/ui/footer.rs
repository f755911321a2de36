use crate::ui::input::KEY_BINDINGS;
use crate::ui::theme::{BROWSER_ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const SEPARATOR: &str = " │ ";

/// Key hints taken from the browser key map.
pub struct Footer;

impl Footer {
    /// Hints that fit in `width` columns, in key map order.
    ///
    /// A hint that does not fit is dropped whole, never cut.
    pub fn hints(width: usize) -> Line<'static> {
        let key_style = Style::default().fg(BROWSER_ACCENT);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (key, label) in KEY_BINDINGS.iter().filter_map(|binding| binding.hint) {
            let lead = if spans.len() > 1 { SEPARATOR } else { "" };
            let hint = [
                Span::styled(lead, separator_style),
                Span::styled(key, key_style),
                Span::styled(format!(": {label}"), text_style),
            ];
            let hint_width: usize = hint.iter().map(Span::width).sum();
            if used + hint_width > width {
                break;
            }
            used += hint_width;
            spans.extend(hint);
        }
        Line::from(spans)
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Self::hints(usize::from(inner.width))).render(inner, buf);
    }
}

//! One-shot rendering of a story outside the interactive browser.

use crate::catalog::Catalog;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::text::Span;
use ratatui::widgets::Widget;
use std::io;

/// Renders `group/label` into a buffer sized to the button.
///
/// `width` caps the buffer width; the button is clipped when narrower.
pub fn render_story(catalog: &Catalog, group: &str, label: &str, width: u16) -> Option<Buffer> {
    let story = catalog.find(group, label)?;
    let button = story.render();
    let area = Rect::new(0, 0, button.width().min(width), 1);
    let mut buf = Buffer::empty(area);
    (&button).render(area, &mut buf);
    Some(buf)
}

/// Serializes a buffer to text with ANSI color sequences, one line per row.
pub fn buffer_to_ansi(buf: &Buffer) -> io::Result<String> {
    let area = buf.area;
    let mut out: Vec<u8> = Vec::new();

    for y in area.top()..area.bottom() {
        let mut current: Option<(Color, Color)> = None;
        // Cells covered by the tail of a wide glyph print nothing
        let mut covered = 0usize;
        for x in area.left()..area.right() {
            if covered > 0 {
                covered -= 1;
                continue;
            }
            let cell = &buf[(x, y)];
            covered = Span::raw(cell.symbol()).width().saturating_sub(1);
            if current != Some((cell.fg, cell.bg)) {
                queue!(
                    out,
                    ResetColor,
                    SetForegroundColor(term_color(cell.fg)),
                    SetBackgroundColor(term_color(cell.bg))
                )?;
                current = Some((cell.fg, cell.bg));
            }
            queue!(out, Print(cell.symbol()))?;
        }
        queue!(out, SetAttribute(Attribute::Reset), ResetColor, Print("\n"))?;
    }

    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{Button, ButtonProps};
    use crate::stories;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        stories::register_all(&mut catalog).unwrap();
        catalog
    }

    #[test]
    fn unknown_story_renders_nothing() {
        assert!(render_story(&catalog(), "Button", "Ghost button", 80).is_none());
        assert!(render_story(&catalog(), "Nope", "Normal button", 80).is_none());
    }

    #[test]
    fn story_buffer_fits_label() {
        let buf = render_story(&catalog(), "Button", "Normal button", 80).unwrap();
        assert_eq!(buf.area, Rect::new(0, 0, 8, 1));
    }

    #[test]
    fn width_caps_buffer() {
        let buf = render_story(&catalog(), "Button", "Normal button", 3).unwrap();
        assert_eq!(buf.area.width, 3);
    }

    #[test]
    fn wide_labels_keep_every_glyph() {
        let mut catalog = Catalog::new();
        catalog
            .stories_of("Button")
            .unwrap()
            .add("Wide", || Button::new(ButtonProps::new("按钮")))
            .unwrap();

        let buf = render_story(&catalog, "Button", "Wide", 80).unwrap();
        assert_eq!(buf.area.width, 6);

        let text = buffer_to_ansi(&buf).unwrap();
        assert!(text.contains(" 按钮 "));
    }

    #[test]
    fn ansi_contains_label_and_colors() {
        let buf = render_story(&catalog(), "Button", "Primary button", 80).unwrap();
        let text = buffer_to_ansi(&buf).unwrap();

        assert!(text.contains('B'));
        assert!(text.ends_with('\n'));
        // crossterm drops color sequences entirely under NO_COLOR
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(text.contains("\x1b[48;5;4m"));
            assert!(text.contains("\x1b[38;5;15m"));
        }
    }
}

use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const SIDEBAR_WIDTH: u16 = 24;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into an optional sidebar and the story canvas.
///
/// The sidebar never takes more than half of the body.
pub fn split_body(body: Rect, show_sidebar: bool) -> (Option<Rect>, Rect) {
    if !show_sidebar {
        return (None, body);
    }
    let width = SIDEBAR_WIDTH.min(body.width / 2);
    if width == 0 {
        return (None, body);
    }
    let sidebar = Rect { width, ..body };
    let canvas = Rect {
        x: body.x + width,
        width: body.width - width,
        ..body
    };
    (Some(sidebar), canvas)
}

/// Region inside `area` with `margin` cells removed on every side.
pub fn inset(area: Rect, margin: u16) -> Rect {
    let double = margin.saturating_mul(2);
    if area.width <= double || area.height <= double {
        return Rect { width: 0, height: 0, ..area };
    }
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width - double,
        height: area.height - double,
    }
}

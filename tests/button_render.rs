use buttonbook::button::{Button, ButtonProps, ButtonStyle};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

fn render(props: ButtonProps) -> Buffer {
    let button = Button::new(props);
    let area = Rect::new(0, 0, 12, 1);
    let mut buf = Buffer::empty(area);
    Widget::render(&button, area, &mut buf);
    buf
}

fn label_cells(label: &str) -> Vec<(u16, u16)> {
    (1..=label.chars().count() as u16).map(|x| (x, 0)).collect()
}

#[test]
fn default_props_render_red_label() {
    let buf = render(ButtonProps::new("Button"));

    for pos in label_cells("Button") {
        assert_eq!(buf[pos].fg, Color::Red);
        assert_eq!(buf[pos].bg, Color::Reset);
    }
    assert_eq!(buf[(1, 0)].symbol(), "B");
    assert_eq!(buf[(6, 0)].symbol(), "n");
}

#[test]
fn empty_props_are_not_primary() {
    let props = ButtonProps::default();
    assert!(!props.primary);
    assert_eq!(Button::new(props).style(), ButtonStyle::BASE);
}

#[test]
fn primary_renders_white_on_blue() {
    let buf = render(ButtonProps::new("Button").primary(true));

    for pos in label_cells("Button") {
        assert_eq!(buf[pos].fg, Color::White);
        assert_eq!(buf[pos].bg, Color::Blue);
    }
}

#[test]
fn padding_carries_button_style() {
    let buf = render(ButtonProps::new("Button").primary(true));

    assert_eq!(buf[(0, 0)].bg, Color::Blue);
    assert_eq!(buf[(7, 0)].bg, Color::Blue);
    // Outside the button the host background is untouched
    assert_eq!(buf[(8, 0)].bg, Color::Reset);
}

#[test]
fn rendering_is_idempotent() {
    for primary in [false, true] {
        let props = ButtonProps::new("Button").primary(primary);
        assert_eq!(render(props.clone()), render(props));
    }
}

#[test]
fn disabled_does_not_change_look() {
    let enabled = Button::new(ButtonProps::new("Button").primary(true));
    let disabled = Button::new(ButtonProps::new("Button").primary(true).disabled(true));

    assert_eq!(enabled.visual(), disabled.visual());
    assert!(disabled.is_disabled());
}

#[test]
fn zero_sized_area_draws_nothing() {
    let button = Button::new(ButtonProps::new("Button"));
    let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
    Widget::render(&button, Rect::new(0, 0, 0, 1), &mut buf);

    assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 4, 1)));
}

#[test]
fn wide_label_is_not_truncated() {
    let button = Button::new(ButtonProps::new("按钮").primary(true));
    assert_eq!(button.width(), 6);

    let area = Rect::new(0, 0, button.width(), 1);
    let mut buf = Buffer::empty(area);
    Widget::render(&button, area, &mut buf);

    assert_eq!(buf[(1, 0)].symbol(), "按");
    assert_eq!(buf[(3, 0)].symbol(), "钮");
    assert_eq!(buf[(3, 0)].fg, Color::White);
    assert_eq!(buf[(5, 0)].bg, Color::Blue);
}

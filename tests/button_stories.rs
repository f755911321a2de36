use buttonbook::button::{Button, ButtonProps};
use buttonbook::catalog::{Catalog, CatalogError};
use buttonbook::stories;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

fn registered() -> Catalog {
    let mut catalog = Catalog::new();
    stories::register_all(&mut catalog).unwrap();
    catalog
}

fn draw(button: &Button) -> Buffer {
    let area = Rect::new(0, 0, button.width(), 1);
    let mut buf = Buffer::empty(area);
    Widget::render(button, area, &mut buf);
    buf
}

#[test]
fn button_group_has_exactly_two_stories() {
    let catalog = registered();
    let group = catalog.group("Button").expect("Button group registered");

    let labels: Vec<&str> = group.stories().iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Normal button", "Primary button"]);
    assert_eq!(catalog.groups().len(), 1);
}

#[test]
fn normal_story_renders_default_button() {
    let catalog = registered();
    let button = catalog.find("Button", "Normal button").unwrap().render();

    assert!(!button.props().primary);
    assert_eq!(button.props().children, "Button");
    assert_eq!(draw(&button)[(1, 0)].fg, Color::Red);
}

#[test]
fn primary_story_matches_direct_primary_render() {
    let catalog = registered();
    let from_story = catalog.find("Button", "Primary button").unwrap().render();
    let direct = Button::new(ButtonProps::new("Button").primary(true));

    assert_eq!(from_story.visual(), direct.visual());
    assert_eq!(draw(&from_story), draw(&direct));
}

#[test]
fn factories_produce_fresh_equal_renders() {
    let catalog = registered();
    let story = catalog.find("Button", "Primary button").unwrap();

    assert_eq!(draw(&story.render()), draw(&story.render()));
}

#[test]
fn registering_twice_is_rejected() {
    let mut catalog = registered();
    let err = stories::button::register(&mut catalog).unwrap_err();

    assert_eq!(
        err,
        CatalogError::DuplicateStory {
            group: "Button".to_string(),
            label: "Normal button".to_string(),
        }
    );
    assert_eq!(catalog.len(), 2);
}

#[test]
fn index_serializes_to_json() {
    let json = serde_json::to_value(registered().index()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "groups": [
                { "name": "Button", "stories": ["Normal button", "Primary button"] }
            ]
        })
    );
}

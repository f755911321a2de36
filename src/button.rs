//! Styled button component.
//!
//! A presentational element: the rendered output is a pure function of
//! [`ButtonProps`]. The terminal host owns mounting, drawing, and click
//! dispatch; this module only decides what the button looks like.

use crate::ui::theme::{BUTTON_PRIMARY_BG, BUTTON_PRIMARY_TEXT, BUTTON_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Widget;
use std::fmt;
use std::sync::Arc;

/// Click callback forwarded to the host.
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// Style rule for a button: text color plus an optional background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub color: Color,
    /// `None` leaves the host background untouched.
    pub background: Option<Color>,
}

impl ButtonStyle {
    /// Rule applied to every button.
    pub const BASE: ButtonStyle = ButtonStyle {
        color: BUTTON_TEXT,
        background: None,
    };

    /// Rule layered on top of [`ButtonStyle::BASE`] for primary buttons.
    pub const PRIMARY: ButtonStyle = ButtonStyle {
        color: BUTTON_PRIMARY_TEXT,
        background: Some(BUTTON_PRIMARY_BG),
    };

    pub fn for_props(primary: bool) -> Self {
        if primary {
            Self::BASE.overridden_by(Self::PRIMARY)
        } else {
            Self::BASE
        }
    }

    /// Later rule wins field by field; an unset background keeps ours.
    pub fn overridden_by(self, other: ButtonStyle) -> Self {
        Self {
            color: other.color,
            background: other.background.or(self.background),
        }
    }
}

impl From<ButtonStyle> for Style {
    fn from(rule: ButtonStyle) -> Self {
        let style = Style::default().fg(rule.color);
        match rule.background {
            Some(bg) => style.bg(bg),
            None => style,
        }
    }
}

/// Inputs of a [`Button`].
#[derive(Clone, Default)]
pub struct ButtonProps {
    pub primary: bool,
    /// Label content, rendered as-is.
    pub children: String,
    pub disabled: bool,
    pub on_click: Option<ClickHandler>,
}

impl ButtonProps {
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: children.into(),
            ..Self::default()
        }
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonProps")
            .field("primary", &self.primary)
            .field("children", &self.children)
            .field("disabled", &self.disabled)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// What a render of a button looks like, independent of where it is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonVisual {
    pub label: String,
    pub style: ButtonStyle,
}

/// Rendered button element.
#[derive(Debug, Clone)]
pub struct Button {
    props: ButtonProps,
}

impl Button {
    pub fn new(props: ButtonProps) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    pub fn style(&self) -> ButtonStyle {
        ButtonStyle::for_props(self.props.primary)
    }

    pub fn visual(&self) -> ButtonVisual {
        ButtonVisual {
            label: self.props.children.clone(),
            style: self.style(),
        }
    }

    /// Terminal columns needed to draw the label with its padding.
    pub fn width(&self) -> u16 {
        let label = Span::raw(self.props.children.as_str()).width();
        u16::try_from(label.saturating_add(2)).unwrap_or(u16::MAX)
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    /// Dispatches a click. Returns `true` when a handler ran.
    pub fn click(&self) -> bool {
        if self.props.disabled {
            return false;
        }
        match &self.props.on_click {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl Widget for &Button {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = format!(" {} ", self.props.children);
        let width = self.width().min(area.width);
        buf.set_stringn(
            area.x,
            area.y,
            text,
            usize::from(width),
            Style::from(self.style()),
        );
    }
}

//! Replaceable rendering primitives
//!
//! The toolbar never builds buttons or tooltips directly; it asks a
//! [`Renderers`] bundle, so hosts can swap in their own widgets while the
//! toolbar keeps its behaviour. [`CosmicRenderers`] uses the stock COSMIC
//! widgets.

use cosmic::Element;
use cosmic::widget::{button, text, tooltip};

use crate::config::ButtonStyle;
use crate::session::messages::Msg;

/// A button the toolbar wants rendered
pub struct ButtonRequest<'a> {
    pub content: Element<'a, Msg>,
    pub style: ButtonStyle,
    pub on_press: Option<Msg>,
}

impl<'a> ButtonRequest<'a> {
    pub fn new(content: impl Into<Element<'a, Msg>>, style: ButtonStyle) -> Self {
        Self {
            content: content.into(),
            style,
            on_press: None,
        }
    }

    pub fn on_press(mut self, msg: Msg) -> Self {
        self.on_press = Some(msg);
        self
    }
}

pub trait Renderers {
    fn button<'a>(&self, request: ButtonRequest<'a>) -> Element<'a, Msg>;

    /// Attach `content` as the tooltip of `trigger`
    fn tooltip<'a>(&self, trigger: Element<'a, Msg>, content: Element<'a, Msg>) -> Element<'a, Msg>;

    /// Wrap the element the tooltip is anchored to
    fn tooltip_trigger<'a>(&self, child: Element<'a, Msg>) -> Element<'a, Msg> {
        child
    }

    fn tooltip_content<'a>(&self, label: String) -> Element<'a, Msg>;

    /// Wrap the whole toolbar tree
    fn tooltip_provider<'a>(&self, child: Element<'a, Msg>) -> Element<'a, Msg> {
        child
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CosmicRenderers;

impl Renderers for CosmicRenderers {
    fn button<'a>(&self, request: ButtonRequest<'a>) -> Element<'a, Msg> {
        button::custom(request.content)
            .class(request.style.class())
            .on_press_maybe(request.on_press)
            .padding(8)
            .into()
    }

    fn tooltip<'a>(&self, trigger: Element<'a, Msg>, content: Element<'a, Msg>) -> Element<'a, Msg> {
        tooltip(
            self.tooltip_trigger(trigger),
            content,
            tooltip::Position::Bottom,
        )
        .into()
    }

    fn tooltip_content<'a>(&self, label: String) -> Element<'a, Msg> {
        text::body(label).into()
    }
}

//! Tool descriptors and the default tool button

use std::fmt;
use std::rc::Rc;

use cosmic::Element;
use cosmic::widget::icon;

use super::renderers::{ButtonRequest, Renderers};
use crate::config::ButtonStyle;
use crate::session::messages::Msg;

/// Replaces the default button.
///
/// Receives the tool's icon, its name (the accessible label) and the message
/// that activates the tool. The result is still wrapped in the name tooltip.
pub type ToolRenderer = Rc<dyn Fn(Element<'static, Msg>, Option<&str>, Msg) -> Element<'static, Msg>>;

/// A tool shown on the toolbar, identified by its position
#[derive(Clone)]
pub struct Tool {
    /// Tooltip text and accessible label
    pub name: Option<String>,
    /// Icon name
    pub icon: String,
    pub render: Option<ToolRenderer>,
}

impl Tool {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            name: None,
            icon: icon.into(),
            render: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn render(
        mut self,
        render: impl Fn(Element<'static, Msg>, Option<&str>, Msg) -> Element<'static, Msg> + 'static,
    ) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Default button or the custom renderer for the tool at `index`
    pub fn view<'a>(
        &'a self,
        index: usize,
        style: ButtonStyle,
        renderers: &dyn Renderers,
    ) -> Element<'a, Msg> {
        let on_press = Msg::tool_pressed(index);
        let icon: Element<'static, Msg> =
            icon::Icon::from(icon::from_name(self.icon.clone()).size(16)).into();

        let control = match &self.render {
            Some(render) => render(icon, self.name.as_deref(), on_press),
            None => renderers.button(ButtonRequest::new(icon, style).on_press(on_press)),
        };

        match &self.name {
            Some(name) => renderers.tooltip(control, renderers.tooltip_content(name.clone())),
            None => control,
        }
    }
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("render", &self.render.as_ref().map(|_| "custom"))
            .finish()
    }
}

impl PartialEq for Tool {
    fn eq(&self, other: &Self) -> bool {
        let same_render = match (&self.render, &other.render) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_render && self.name == other.name && self.icon == other.icon
    }
}

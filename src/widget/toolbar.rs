//! Toolbar body: grip, tools and close control

use cosmic::Element;
use cosmic::iced_core::Alignment;
use cosmic::iced_widget::{Column, Row};
use cosmic::widget::{container, icon};

use super::grip::Grip;
use super::renderers::{ButtonRequest, Renderers};
use super::tool::Tool;
use crate::config::{DevBarSettings, Orientation};
use crate::session::messages::Msg;

fn control_icon(name: &str) -> icon::Icon {
    icon::Icon::from(icon::from_name(name).size(16))
}

pub fn build_toolbar<'a>(
    tools: &'a [Tool],
    settings: &'a DevBarSettings,
    renderers: &dyn Renderers,
    dragging: bool,
) -> Element<'a, Msg> {
    let styles = &settings.styles;

    // Releasing over the grip also ends the drag
    let grip_button = renderers.button(
        ButtonRequest::new(control_icon(&settings.icons.grip), styles.move_button)
            .on_press(Msg::pointer_released()),
    );
    let grip = Grip::new(grip_button, Msg::grip_pressed).dragging(dragging);
    let grip = renderers.tooltip(
        grip.into(),
        renderers.tooltip_content(settings.labels.move_button.clone()),
    );

    let close = renderers.button(
        ButtonRequest::new(control_icon(&settings.icons.close), styles.close_button)
            .on_press(Msg::close()),
    );
    let close = renderers.tooltip(
        close,
        renderers.tooltip_content(settings.labels.close_toolbar.clone()),
    );

    let mut items: Vec<Element<'a, Msg>> = Vec::with_capacity(tools.len() + 2);
    items.push(grip);
    items.extend(
        tools
            .iter()
            .enumerate()
            .map(|(index, tool)| tool.view(index, styles.tool_button, renderers)),
    );
    items.push(close);

    let body: Element<'a, Msg> = match settings.orientation {
        Orientation::Horizontal => Row::with_children(items)
            .spacing(styles.spacing)
            .align_y(Alignment::Center)
            .into(),
        Orientation::Vertical => Column::with_children(items)
            .spacing(styles.spacing)
            .align_x(Alignment::Center)
            .into(),
    };

    container(body)
        .padding(styles.padding)
        .class(styles.toolbar.class())
        .into()
}

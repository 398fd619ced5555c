//! Re-open button shown while the toolbar is closed

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::{Alignment, alignment};
use cosmic::iced_widget::row;
use cosmic::widget::{container, icon, text};

use super::renderers::{ButtonRequest, Renderers};
use crate::config::DevBarSettings;
use crate::domain::{Align, Anchor};
use crate::session::messages::Msg;

/// Distance between the re-open button and the window edges
pub const TOGGLE_MARGIN: u16 = 16;

fn horizontal(align: Align) -> alignment::Horizontal {
    match align {
        Align::Start => alignment::Horizontal::Left,
        Align::Center => alignment::Horizontal::Center,
        Align::End => alignment::Horizontal::Right,
    }
}

fn vertical(align: Align) -> alignment::Vertical {
    match align {
        Align::Start => alignment::Vertical::Top,
        Align::Center => alignment::Vertical::Center,
        Align::End => alignment::Vertical::Bottom,
    }
}

pub fn build_toggle_button<'a>(
    settings: &'a DevBarSettings,
    renderers: &dyn Renderers,
) -> Element<'a, Msg> {
    let anchor: Anchor = settings.toggle_position;

    let content = row![
        icon::Icon::from(icon::from_name(settings.icons.chevron_up.as_str()).size(16)),
        text::body(settings.labels.open_toolbar.as_str()),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let button = renderers.button(
        ButtonRequest::new(content, settings.styles.open_button).on_press(Msg::open()),
    );

    container(button)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(TOGGLE_MARGIN)
        .align_x(horizontal(anchor.horizontal()))
        .align_y(vertical(anchor.vertical()))
        .into()
}

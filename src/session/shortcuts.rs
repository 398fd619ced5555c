//! Translation of window-wide iced events into toolbar messages

use cosmic::iced::keyboard::{
    self, Modifiers,
    key::{Code, Physical},
};
use cosmic::iced::mouse;
use cosmic::iced_core::event;
use cosmic::iced_futures::{Subscription, event::listen_with};

use crate::domain::Point;
use crate::session::hotkey::HeldModifiers;
use crate::session::messages::Msg;

/// Physical key code name as used in hotkey settings (`KeyI`, `MetaLeft`, ...)
pub fn code_name(physical: &Physical) -> Option<String> {
    match physical {
        Physical::Code(Code::SuperLeft) => Some("MetaLeft".to_string()),
        Physical::Code(Code::SuperRight) => Some("MetaRight".to_string()),
        Physical::Code(code) => Some(format!("{code:?}")),
        Physical::Unidentified(_) => None,
    }
}

pub fn held_modifiers(modifiers: Modifiers) -> HeldModifiers {
    HeldModifiers {
        shift: modifiers.shift(),
        control: modifiers.control(),
        alt: modifiers.alt(),
        meta: modifiers.logo(),
    }
}

pub fn handle_key_event(event: keyboard::Event, status: event::Status) -> Option<Msg> {
    match event {
        keyboard::Event::KeyPressed {
            physical_key,
            modifiers,
            ..
        } => Some(Msg::key_pressed(
            code_name(&physical_key)?,
            held_modifiers(modifiers),
            status == event::Status::Captured,
        )),
        keyboard::Event::KeyReleased { physical_key, .. } => {
            Some(Msg::key_released(code_name(&physical_key)?))
        }
        _ => None,
    }
}

pub fn handle_pointer_event(event: mouse::Event) -> Option<Msg> {
    match event {
        mouse::Event::CursorMoved { position } => {
            Some(Msg::pointer_moved(Point::new(position.x, position.y)))
        }
        mouse::Event::ButtonReleased(_) => Some(Msg::pointer_released()),
        _ => None,
    }
}

/// Window-wide pointer move/release listener
pub fn pointer_listener() -> Subscription<Msg> {
    listen_with(|event, _, _| match event {
        cosmic::iced_core::Event::Mouse(mouse_event) => handle_pointer_event(mouse_event),
        _ => None,
    })
}

/// Window-wide key press/release listener
pub fn keyboard_listener() -> Subscription<Msg> {
    listen_with(|event, status, _| match event {
        cosmic::iced_core::Event::Keyboard(keyboard_event) => {
            handle_key_event(keyboard_event, status)
        }
        _ => None,
    })
}

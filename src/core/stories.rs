//! Showcase stories: preset toolbar configurations

use devbar::config::{DevBarSettings, Orientation, Story};
use devbar::domain::Anchor;
use devbar::fl;
use devbar::session::hotkey::HotkeySpec;
use devbar::widget::Tool;

pub const STORIES: [Story; 5] = [
    Story::Horizontal,
    Story::DefaultClosed,
    Story::WithHotkey,
    Story::HorizontalTopLeft,
    Story::Vertical,
];

pub fn title(story: Story) -> String {
    match story {
        Story::Horizontal => fl!("story-horizontal"),
        Story::DefaultClosed => fl!("story-default-closed"),
        Story::WithHotkey => fl!("story-with-hotkey"),
        Story::HorizontalTopLeft => fl!("story-horizontal-top-left"),
        Story::Vertical => fl!("story-vertical"),
    }
}

pub fn settings(story: Story) -> DevBarSettings {
    let base = DevBarSettings::default();
    match story {
        Story::Horizontal => base,
        Story::DefaultClosed => DevBarSettings {
            default_open: false,
            ..base
        },
        Story::WithHotkey => DevBarSettings {
            hotkey: HotkeySpec::Combo("meta+i".to_string()),
            ..base
        },
        Story::HorizontalTopLeft => DevBarSettings {
            default_position: Anchor::TopLeft.into(),
            ..base
        },
        Story::Vertical => DevBarSettings {
            orientation: Orientation::Vertical,
            ..base
        },
    }
}

/// Settings, Theme and an unnamed bug tool
pub fn demo_tools() -> Vec<Tool> {
    vec![
        Tool::new("preferences-system-symbolic").name(fl!("tool-settings")),
        Tool::new("preferences-desktop-theme-symbolic").name(fl!("tool-theme")),
        Tool::new("bug-symbolic"),
    ]
}

//! Toolbar settings and showcase configuration persistence

use std::path::Path;

use anyhow::Context;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::iced_core::{Background, Border, Color, Shadow, Vector};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Anchor, DEFAULT_EDGE_PADDING, DefaultPosition};
use crate::fl;
use crate::session::hotkey::{HotkeyOptions, HotkeySpec};
use crate::session::state::PlacementMode;

/// Layout direction of the tool controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Button look, mapped onto the COSMIC button classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonStyle {
    #[default]
    Icon,
    Standard,
    Text,
    Suggested,
    Destructive,
    Link,
}

impl ButtonStyle {
    pub fn class(self) -> cosmic::theme::Button {
        match self {
            ButtonStyle::Icon => cosmic::theme::Button::Icon,
            ButtonStyle::Standard => cosmic::theme::Button::Standard,
            ButtonStyle::Text => cosmic::theme::Button::Text,
            ButtonStyle::Suggested => cosmic::theme::Button::Suggested,
            ButtonStyle::Destructive => cosmic::theme::Button::Destructive,
            ButtonStyle::Link => cosmic::theme::Button::Link,
        }
    }
}

/// Toolbar container look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerStyle {
    /// Rounded component surface with a drop shadow
    #[default]
    Pill,
    Card,
    Background,
    Primary,
    Secondary,
    Transparent,
}

impl ContainerStyle {
    pub fn class(self) -> cosmic::theme::Container<'static> {
        match self {
            ContainerStyle::Pill => {
                cosmic::theme::Container::Custom(Box::new(|theme| {
                    let cosmic_theme = theme.cosmic();
                    cosmic::iced::widget::container::Style {
                        background: Some(Background::Color(
                            cosmic_theme.background.component.base.into(),
                        )),
                        text_color: Some(cosmic_theme.background.component.on.into()),
                        border: Border {
                            radius: cosmic_theme.corner_radii.radius_xl.into(),
                            width: 1.0,
                            color: cosmic_theme.background.component.divider.into(),
                        },
                        shadow: Shadow {
                            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                            offset: Vector::new(0.0, 4.0),
                            blur_radius: 12.0,
                        },
                        ..Default::default()
                    }
                }))
            }
            ContainerStyle::Card => cosmic::theme::Container::Card,
            ContainerStyle::Background => cosmic::theme::Container::Background,
            ContainerStyle::Primary => cosmic::theme::Container::Primary,
            ContainerStyle::Secondary => cosmic::theme::Container::Secondary,
            ContainerStyle::Transparent => cosmic::theme::Container::Transparent,
        }
    }
}

/// Visual overrides for the toolbar and its controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub toolbar: ContainerStyle,
    pub move_button: ButtonStyle,
    pub tool_button: ButtonStyle,
    pub close_button: ButtonStyle,
    pub open_button: ButtonStyle,
    /// Gap between controls
    pub spacing: u16,
    /// Toolbar padding as [vertical, horizontal]
    pub padding: [u16; 2],
}

impl Default for StyleOverrides {
    fn default() -> Self {
        Self {
            toolbar: ContainerStyle::Pill,
            move_button: ButtonStyle::Icon,
            tool_button: ButtonStyle::Icon,
            close_button: ButtonStyle::Icon,
            open_button: ButtonStyle::Standard,
            spacing: 8,
            padding: [8, 16],
        }
    }
}

/// Accessible labels and tooltips of the built-in controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub move_button: String,
    pub close_toolbar: String,
    pub open_toolbar: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            move_button: fl!("move-toolbar"),
            close_toolbar: fl!("close-toolbar"),
            open_toolbar: fl!("open-toolbar"),
        }
    }
}

/// Icon names of the built-in controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconOverrides {
    pub grip: String,
    pub close: String,
    pub chevron_up: String,
}

impl Default for IconOverrides {
    fn default() -> Self {
        Self {
            grip: "list-drag-handle-symbolic".to_string(),
            close: "window-close-symbolic".to_string(),
            chevron_up: "go-up-symbolic".to_string(),
        }
    }
}

/// Everything a host can customise on a toolbar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevBarSettings {
    pub orientation: Orientation,
    /// Whether the toolbar starts open
    pub default_open: bool,
    /// Explicit `{x, y}` or an anchor name
    pub default_position: DefaultPosition,
    pub placement_mode: PlacementMode,
    /// Distance kept from the viewport edge when resolving an anchor
    pub edge_padding: f32,
    /// Show the re-open button while the toolbar is closed
    pub show_toggle: bool,
    #[serde(deserialize_with = "toggle_position_or_default")]
    pub toggle_position: Anchor,
    pub hotkey: HotkeySpec,
    pub hotkey_options: HotkeyOptions,
    pub styles: StyleOverrides,
    pub labels: Labels,
    pub icons: IconOverrides,
}

impl Default for DevBarSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            default_open: true,
            default_position: DefaultPosition::default(),
            placement_mode: PlacementMode::FreeFloating,
            edge_padding: DEFAULT_EDGE_PADDING,
            show_toggle: true,
            toggle_position: Anchor::BottomRight,
            hotkey: HotkeySpec::default(),
            hotkey_options: HotkeyOptions::default(),
            styles: StyleOverrides::default(),
            labels: Labels::default(),
            icons: IconOverrides::default(),
        }
    }
}

/// Unknown toggle positions fall back to the bottom-right corner
fn toggle_position_or_default<'de, D>(deserializer: D) -> Result<Anchor, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(Anchor::parse_or(&name, Anchor::BottomRight))
}

impl DevBarSettings {
    /// Anchor used for initial placement; explicit positions fall back to the default anchor
    pub fn anchor(&self) -> Anchor {
        match self.default_position {
            DefaultPosition::Anchor(anchor) => anchor,
            DefaultPosition::Explicit(_) => Anchor::default(),
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid toolbar settings")
    }

    /// Read settings from a JSON file; missing fields take their defaults
    pub fn load_json(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Could not load {}", path.display()))
    }
}

/// Showcase story selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Story {
    #[default]
    Horizontal,
    DefaultClosed,
    WithHotkey,
    HorizontalTopLeft,
    Vertical,
}

/// Showcase state persisted between sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CosmicConfigEntry)]
#[version = 1]
pub struct ShowcaseConfig {
    /// Story shown at startup
    pub story: Story,
}

impl ShowcaseConfig {
    /// Configuration ID for cosmic-config
    pub const ID: &'static str = "io.github.devbar.showcase";

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => match Self::get_entry(&config) {
                Ok(entry) => entry,
                Err((errs, entry)) => {
                    log::warn!("Error loading config, using defaults: {:?}", errs);
                    entry
                }
            },
            Err(err) => {
                log::warn!("Could not create config handler: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => {
                if let Err(err) = self.write_entry(&config) {
                    log::error!("Failed to save config: {:?}", err);
                }
            }
            Err(err) => {
                log::error!("Could not create config handler for saving: {:?}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    #[test]
    fn test_defaults() {
        let settings = DevBarSettings::default();
        assert_eq!(settings.orientation, Orientation::Horizontal);
        assert!(settings.default_open);
        assert!(settings.show_toggle);
        assert_eq!(settings.toggle_position, Anchor::BottomRight);
        assert_eq!(
            settings.default_position,
            DefaultPosition::Anchor(Anchor::BottomCenter)
        );
        assert_eq!(settings.edge_padding, 20.0);
        assert_eq!(settings.labels.open_toolbar, "Open Toolbar");
        assert_eq!(settings.labels.close_toolbar, "Close toolbar");
        assert_eq!(settings.labels.move_button, "Move toolbar");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = DevBarSettings::from_json(
            r#"{
                "orientation": "vertical",
                "default_position": "top-left",
                "hotkey": "meta+i",
                "styles": { "spacing": 4 }
            }"#,
        )
        .unwrap();
        assert_eq!(settings.orientation, Orientation::Vertical);
        assert_eq!(settings.default_position, DefaultPosition::Anchor(Anchor::TopLeft));
        assert_eq!(settings.hotkey, HotkeySpec::Combo("meta+i".to_string()));
        assert_eq!(settings.styles.spacing, 4);
        assert_eq!(settings.styles.padding, [8, 16]);
        assert!(settings.hotkey_options.enabled);
        assert_eq!(settings.icons, IconOverrides::default());
    }

    #[test]
    fn test_explicit_position_and_codes() {
        let settings = DevBarSettings::from_json(
            r#"{
                "default_position": { "x": 50, "y": 50 },
                "hotkey": ["ControlLeft", "KeyK"],
                "placement_mode": "anchor-locked"
            }"#,
        )
        .unwrap();
        assert_eq!(
            settings.default_position,
            DefaultPosition::Explicit(Point::new(50.0, 50.0))
        );
        assert_eq!(
            settings.hotkey,
            HotkeySpec::Codes(vec!["ControlLeft".to_string(), "KeyK".to_string()])
        );
        assert_eq!(settings.placement_mode, PlacementMode::AnchorLocked);
        assert_eq!(settings.anchor(), Anchor::BottomCenter);
    }

    #[test]
    fn test_unknown_anchor_names_fall_back() {
        let settings = DevBarSettings::from_json(
            r#"{
                "orientation": "vertical",
                "default_position": "middle",
                "toggle_position": "nowhere",
                "show_toggle": false
            }"#,
        )
        .unwrap();
        assert_eq!(
            settings.default_position,
            DefaultPosition::Anchor(Anchor::BottomCenter)
        );
        assert_eq!(settings.toggle_position, Anchor::BottomRight);
        assert_eq!(settings.orientation, Orientation::Vertical);
        assert!(!settings.show_toggle);

        let settings = DevBarSettings::from_json(r#"{ "toggle_position": "top" }"#).unwrap();
        assert_eq!(settings.toggle_position, Anchor::TopCenter);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(DevBarSettings::from_json("{ \"orientation\": 3 }").is_err());
        assert!(DevBarSettings::load_json("/nonexistent/devbar.json").is_err());
    }
}

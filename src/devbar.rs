//! The floating developer toolbar component
//!
//! A host application owns a [`DevBar`], calls [`DevBar::mount`] once it is
//! shown, routes [`Msg`] values from [`DevBar::view`] and
//! [`DevBar::subscription`] back into [`DevBar::update`], and reacts to the
//! returned [`Event`]s.

use std::rc::Rc;

use cosmic::Element;
use cosmic::iced::{Length, Subscription};

use crate::config::DevBarSettings;
use crate::domain::{DefaultPosition, Point};
use crate::session::hotkey::{ChordDetector, HotkeyOptions, HotkeySpec, KeyOutcome};
use crate::session::listeners::{Listener, ListenerKind, ListenerTracker};
use crate::session::messages::{Event, KeyMsg, Msg, PositionMsg, VisibilityMsg};
use crate::session::shortcuts;
use crate::session::state::ToolbarState;
use crate::widget::toggle_button::build_toggle_button;
use crate::widget::toolbar::build_toolbar;
use crate::widget::{CosmicRenderers, Floating, Renderers, Tool};

pub struct DevBar {
    tools: Vec<Tool>,
    settings: DevBarSettings,
    renderers: Rc<dyn Renderers>,
    state: ToolbarState,
    detector: ChordDetector,
    /// Bumped whenever the hotkey changes so keyboard listeners are replaced
    hotkey_generation: u64,
    listeners: ListenerTracker,
    mounted: bool,
}

impl DevBar {
    pub fn new(tools: Vec<Tool>, settings: DevBarSettings) -> Self {
        Self {
            state: ToolbarState::new(settings.default_open, settings.default_position),
            detector: ChordDetector::new(settings.hotkey.chord()),
            tools,
            settings,
            renderers: Rc::new(CosmicRenderers),
            hotkey_generation: 0,
            listeners: ListenerTracker::default(),
            mounted: false,
        }
    }

    /// Replace the default COSMIC buttons and tooltips
    pub fn renderers(mut self, renderers: impl Renderers + 'static) -> Self {
        self.renderers = Rc::new(renderers);
        self
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn position(&self) -> Point {
        self.state.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn listeners(&self) -> &ListenerTracker {
        &self.listeners
    }

    pub fn settings(&self) -> &DevBarSettings {
        &self.settings
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    fn desired_listeners(&self) -> Vec<Listener> {
        if !self.mounted {
            return Vec::new();
        }

        let mut desired = vec![
            Listener::new(ListenerKind::PointerMove, 0),
            Listener::new(ListenerKind::PointerUp, 0),
        ];
        if self.settings.hotkey_options.enabled {
            desired.push(Listener::new(ListenerKind::KeyDown, self.hotkey_generation));
            desired.push(Listener::new(ListenerKind::KeyUp, self.hotkey_generation));
        }
        desired
    }

    fn sync_listeners(&mut self) {
        let desired = self.desired_listeners();
        self.listeners.reconcile(desired);
    }

    /// Start listening for global pointer and keyboard events
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        log::debug!("Mounting toolbar");
        self.mounted = true;
        self.sync_listeners();
    }

    /// Release every global listener and drop transient input state
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        log::debug!("Unmounting toolbar");
        self.mounted = false;
        self.state.end_drag();
        self.detector.reset();
        self.sync_listeners();
    }

    pub fn set_hotkey(&mut self, hotkey: HotkeySpec, options: HotkeyOptions) {
        if self.settings.hotkey == hotkey && self.settings.hotkey_options == options {
            return;
        }
        self.detector = ChordDetector::new(hotkey.chord());
        log::debug!("Toolbar hotkey is now {}", self.detector.chord());
        self.settings.hotkey = hotkey;
        self.settings.hotkey_options = options;
        self.hotkey_generation += 1;
        self.sync_listeners();
    }

    pub fn set_default_position(&mut self, default_position: DefaultPosition) {
        if self.settings.default_position == default_position {
            return;
        }
        self.settings.default_position = default_position;
        self.state.reset_placement(default_position);
    }

    pub fn set_tools(&mut self, tools: Vec<Tool>) {
        self.tools = tools;
    }

    /// Apply new settings; hotkey and default position changes take effect as with their setters
    pub fn set_settings(&mut self, settings: DevBarSettings) {
        self.set_hotkey(settings.hotkey.clone(), settings.hotkey_options);
        self.set_default_position(settings.default_position);
        self.settings = settings;
    }

    pub fn update(&mut self, msg: Msg) -> Option<Event> {
        match msg {
            Msg::Visibility(msg) => self.update_visibility(msg),
            Msg::Position(msg) => {
                self.update_position(msg);
                None
            }
            Msg::Key(msg) => self.update_key(msg),
            Msg::ToolPressed(index) => match self.tools.get(index) {
                Some(tool) => Some(Event::ToolActivated {
                    index,
                    name: tool.name.clone(),
                }),
                None => {
                    log::warn!("Ignoring press of unknown tool {}", index);
                    None
                }
            },
        }
    }

    fn update_visibility(&mut self, msg: VisibilityMsg) -> Option<Event> {
        let changed = match msg {
            VisibilityMsg::Toggle => {
                self.state.toggle();
                true
            }
            VisibilityMsg::Close => self.state.close(),
            VisibilityMsg::Open => self.state.open(),
        };
        if !changed {
            return None;
        }
        log::debug!("Toolbar open: {}", self.state.is_open());
        Some(Event::VisibilityChanged(self.state.is_open()))
    }

    fn update_position(&mut self, msg: PositionMsg) {
        match msg {
            PositionMsg::GripPressed(pointer) => {
                // Without a release listener the session could never end
                if !self.listeners.is_active(ListenerKind::PointerUp) {
                    return;
                }
                self.state.begin_drag(pointer);
                log::debug!("Toolbar drag started at {:?}", pointer);
            }
            PositionMsg::PointerMoved(pointer) => {
                if self.listeners.is_active(ListenerKind::PointerMove) {
                    self.state.drag_to(pointer);
                }
            }
            PositionMsg::PointerReleased => {
                if self.listeners.is_active(ListenerKind::PointerUp) && self.state.end_drag() {
                    log::debug!("Toolbar drag ended at {:?}", self.state.position());
                }
            }
            PositionMsg::Measured { toolbar, viewport } => {
                let placed = self.state.place(
                    self.settings.anchor(),
                    viewport,
                    toolbar,
                    self.settings.edge_padding,
                    self.settings.placement_mode,
                );
                if placed {
                    log::debug!("Toolbar placed at {:?}", self.state.position());
                }
            }
        }
    }

    fn update_key(&mut self, msg: KeyMsg) -> Option<Event> {
        match msg {
            KeyMsg::Pressed {
                code,
                modifiers,
                captured,
            } => {
                if !self.listeners.is_active(ListenerKind::KeyDown) {
                    return None;
                }
                if captured && !self.settings.hotkey_options.enable_in_text_input {
                    return None;
                }
                match self.detector.key_down(&code, &modifiers) {
                    KeyOutcome::Triggered => self.update_visibility(VisibilityMsg::Toggle),
                    KeyOutcome::Recorded | KeyOutcome::Ignored => None,
                }
            }
            KeyMsg::Released { code } => {
                if self.listeners.is_active(ListenerKind::KeyUp) {
                    self.detector.key_up(&code);
                }
                None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Msg> {
        let renderers = self.renderers.as_ref();

        let content: Element<'_, Msg> = if self.state.is_open() {
            let toolbar = build_toolbar(
                &self.tools,
                &self.settings,
                renderers,
                self.state.is_dragging(),
            );
            Floating::new(toolbar, self.state.position())
                .on_measure(Msg::measured)
                .into()
        } else if self.settings.show_toggle {
            build_toggle_button(&self.settings, renderers)
        } else {
            cosmic::widget::horizontal_space()
                .width(Length::Fixed(0.0))
                .into()
        };

        renderers.tooltip_provider(content)
    }

    /// Global listeners for the current listener set
    pub fn subscription(&self) -> Subscription<Msg> {
        let mut subscriptions = Vec::new();

        if self.listeners.active().any(|listener| listener.kind.is_pointer()) {
            subscriptions.push(shortcuts::pointer_listener());
        }

        if self.listeners.active().any(|listener| listener.kind.is_keyboard()) {
            subscriptions.push(
                shortcuts::keyboard_listener()
                    .with(self.hotkey_generation)
                    .map(|(_, msg)| msg),
            );
        }

        Subscription::batch(subscriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Anchor, Size};
    use crate::session::hotkey::HeldModifiers;

    fn mounted(settings: DevBarSettings) -> DevBar {
        let tools = vec![
            Tool::new("preferences-system-symbolic").name("Settings"),
            Tool::new("bug-symbolic"),
        ];
        let mut devbar = DevBar::new(tools, settings);
        devbar.mount();
        devbar
    }

    fn placed_at(point: Point) -> DevBarSettings {
        DevBarSettings {
            default_position: point.into(),
            ..DevBarSettings::default()
        }
    }

    fn press(devbar: &mut DevBar, code: &str, modifiers: HeldModifiers) -> Option<Event> {
        devbar.update(Msg::key_pressed(code, modifiers, false))
    }

    #[test]
    fn test_mount_unmount_releases_every_listener() {
        let mut devbar = DevBar::new(Vec::new(), DevBarSettings::default());
        assert!(devbar.listeners().is_empty());

        devbar.mount();
        assert_eq!(devbar.listeners().added(), 4);
        assert_eq!(devbar.listeners().removed(), 0);

        devbar.unmount();
        assert!(devbar.listeners().is_empty());
        assert_eq!(devbar.listeners().added(), devbar.listeners().removed());
    }

    #[test]
    fn test_global_messages_ignored_after_unmount() {
        let mut devbar = mounted(placed_at(Point::new(100.0, 100.0)));
        devbar.update(Msg::grip_pressed(Point::new(110.0, 110.0)));
        devbar.unmount();

        devbar.update(Msg::pointer_moved(Point::new(500.0, 500.0)));
        assert_eq!(devbar.position(), Point::new(100.0, 100.0));
        assert!(!devbar.is_dragging());

        press(&mut devbar, "KeyI", HeldModifiers::meta());
        assert!(devbar.is_open());

        devbar.update(Msg::grip_pressed(Point::new(110.0, 110.0)));
        assert!(!devbar.is_dragging());

        devbar.mount();
        assert!(!devbar.is_dragging());
        devbar.update(Msg::pointer_moved(Point::new(300.0, 300.0)));
        assert_eq!(devbar.position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_hotkey_toggles_on_each_press() {
        let mut devbar = mounted(DevBarSettings::default());
        assert_eq!(press(&mut devbar, "MetaLeft", HeldModifiers::meta()), None);
        assert_eq!(
            press(&mut devbar, "KeyI", HeldModifiers::meta()),
            Some(Event::VisibilityChanged(false))
        );

        // Auto-repeat
        assert_eq!(press(&mut devbar, "KeyI", HeldModifiers::meta()), None);
        assert!(!devbar.is_open());

        devbar.update(Msg::key_released("KeyI"));
        assert_eq!(
            press(&mut devbar, "KeyI", HeldModifiers::meta()),
            Some(Event::VisibilityChanged(true))
        );
    }

    #[test]
    fn test_key_without_modifier_never_toggles() {
        let mut devbar = mounted(DevBarSettings::default());
        for _ in 0..3 {
            assert_eq!(press(&mut devbar, "KeyI", HeldModifiers::NONE), None);
            devbar.update(Msg::key_released("KeyI"));
        }
        assert!(devbar.is_open());
    }

    #[test]
    fn test_captured_key_presses_respect_text_input_option() {
        let mut devbar = mounted(DevBarSettings::default());
        assert_eq!(
            devbar.update(Msg::key_pressed("KeyI", HeldModifiers::meta(), true)),
            None
        );
        assert!(devbar.is_open());

        devbar.set_hotkey(
            HotkeySpec::default(),
            HotkeyOptions {
                enabled: true,
                enable_in_text_input: true,
            },
        );
        assert_eq!(
            devbar.update(Msg::key_pressed("KeyI", HeldModifiers::meta(), true)),
            Some(Event::VisibilityChanged(false))
        );
    }

    #[test]
    fn test_changing_hotkey_replaces_keyboard_listeners() {
        let mut devbar = mounted(DevBarSettings::default());
        devbar.set_hotkey(HotkeySpec::Combo("ctrl+k".to_string()), HotkeyOptions::default());
        assert_eq!(devbar.listeners().added(), 6);
        assert_eq!(devbar.listeners().removed(), 2);

        assert_eq!(press(&mut devbar, "KeyI", HeldModifiers::meta()), None);
        let ctrl = HeldModifiers {
            control: true,
            ..HeldModifiers::NONE
        };
        assert_eq!(
            press(&mut devbar, "KeyK", ctrl),
            Some(Event::VisibilityChanged(false))
        );

        // Same hotkey again changes nothing
        devbar.set_hotkey(HotkeySpec::Combo("ctrl+k".to_string()), HotkeyOptions::default());
        assert_eq!(devbar.listeners().added(), 6);

        devbar.unmount();
        assert_eq!(devbar.listeners().added(), devbar.listeners().removed());
    }

    #[test]
    fn test_disabled_hotkey_has_no_keyboard_listeners() {
        let settings = DevBarSettings {
            hotkey_options: HotkeyOptions {
                enabled: false,
                enable_in_text_input: false,
            },
            ..DevBarSettings::default()
        };
        let mut devbar = mounted(settings);
        assert_eq!(devbar.listeners().added(), 2);
        assert!(!devbar.listeners().is_active(ListenerKind::KeyDown));
        assert_eq!(press(&mut devbar, "KeyI", HeldModifiers::meta()), None);
        assert!(devbar.is_open());
    }

    #[test]
    fn test_measure_then_drag() {
        let mut devbar = mounted(DevBarSettings::default());
        devbar.update(Msg::measured(
            Size::new(200.0, 50.0),
            Size::new(1000.0, 800.0),
        ));
        assert_eq!(devbar.position(), Point::new(400.0, 730.0));

        devbar.update(Msg::grip_pressed(Point::new(410.0, 740.0)));
        assert!(devbar.is_dragging());
        devbar.update(Msg::pointer_moved(Point::new(500.0, 500.0)));
        assert_eq!(devbar.position(), Point::new(490.0, 490.0));

        devbar.update(Msg::pointer_released());
        assert!(!devbar.is_dragging());
        devbar.update(Msg::pointer_moved(Point::new(0.0, 0.0)));
        assert_eq!(devbar.position(), Point::new(490.0, 490.0));

        // A later measurement does not undo the drag
        devbar.update(Msg::measured(
            Size::new(200.0, 50.0),
            Size::new(1200.0, 900.0),
        ));
        assert_eq!(devbar.position(), Point::new(490.0, 490.0));
    }

    #[test]
    fn test_default_position_change_resolves_again() {
        let mut devbar = mounted(DevBarSettings::default());
        let toolbar = Size::new(200.0, 50.0);
        let viewport = Size::new(1000.0, 800.0);
        devbar.update(Msg::measured(toolbar, viewport));

        devbar.set_default_position(Anchor::BottomRight.into());
        devbar.update(Msg::measured(toolbar, viewport));
        assert_eq!(devbar.position(), Point::new(780.0, 730.0));

        devbar.set_default_position(Point::new(50.0, 50.0).into());
        assert_eq!(devbar.position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_close_and_reopen() {
        let mut devbar = mounted(DevBarSettings::default());
        assert_eq!(
            devbar.update(Msg::close()),
            Some(Event::VisibilityChanged(false))
        );
        assert_eq!(devbar.update(Msg::close()), None);
        assert!(!devbar.is_open());
        assert_eq!(
            devbar.update(Msg::open()),
            Some(Event::VisibilityChanged(true))
        );
    }

    #[test]
    fn test_default_closed() {
        let devbar = mounted(DevBarSettings {
            default_open: false,
            ..DevBarSettings::default()
        });
        assert!(!devbar.is_open());
    }

    #[test]
    fn test_tool_press_reports_tool() {
        let mut devbar = mounted(DevBarSettings::default());
        assert_eq!(
            devbar.update(Msg::tool_pressed(0)),
            Some(Event::ToolActivated {
                index: 0,
                name: Some("Settings".to_string())
            })
        );
        assert_eq!(
            devbar.update(Msg::tool_pressed(1)),
            Some(Event::ToolActivated {
                index: 1,
                name: None
            })
        );
        assert_eq!(devbar.update(Msg::tool_pressed(2)), None);
    }
}

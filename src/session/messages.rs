//! Message types for the toolbar
//!
//! This module contains:
//! - Msg enum with nested sub-enums for organized message handling
//! - Event enum reported back to the host application

use crate::domain::{Point, Size};
use crate::session::hotkey::HeldModifiers;

// ============================================================================
// Visibility Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMsg {
    /// Flip open/closed
    Toggle,
    /// Close control pressed
    Close,
    /// Re-open control pressed
    Open,
}

// ============================================================================
// Position Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionMsg {
    /// Grip pressed at pointer position
    GripPressed(Point),
    /// Global pointer movement
    PointerMoved(Point),
    /// Global pointer release
    PointerReleased,
    /// Toolbar laid out with the given size inside the given viewport
    Measured { toolbar: Size, viewport: Size },
}

// ============================================================================
// Keyboard Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMsg {
    /// Physical key pressed
    Pressed {
        code: String,
        modifiers: HeldModifiers,
        /// A focused widget (e.g. a text input) already handled the press
        captured: bool,
    },
    /// Physical key released
    Released { code: String },
}

// ============================================================================
// Main Message Enum
// ============================================================================

/// Messages handled by `DevBar::update`
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Visibility(VisibilityMsg),
    Position(PositionMsg),
    Key(KeyMsg),
    /// Tool at this index was activated
    ToolPressed(usize),
}

/// Notifications returned to the host from `DevBar::update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    VisibilityChanged(bool),
    ToolActivated { index: usize, name: Option<String> },
}

impl Msg {
    pub fn toggle() -> Self {
        Self::Visibility(VisibilityMsg::Toggle)
    }
    pub fn close() -> Self {
        Self::Visibility(VisibilityMsg::Close)
    }
    pub fn open() -> Self {
        Self::Visibility(VisibilityMsg::Open)
    }
    pub fn grip_pressed(pointer: Point) -> Self {
        Self::Position(PositionMsg::GripPressed(pointer))
    }
    pub fn pointer_moved(pointer: Point) -> Self {
        Self::Position(PositionMsg::PointerMoved(pointer))
    }
    pub fn pointer_released() -> Self {
        Self::Position(PositionMsg::PointerReleased)
    }
    pub fn measured(toolbar: Size, viewport: Size) -> Self {
        Self::Position(PositionMsg::Measured { toolbar, viewport })
    }
    pub fn key_pressed(code: impl Into<String>, modifiers: HeldModifiers, captured: bool) -> Self {
        Self::Key(KeyMsg::Pressed {
            code: code.into(),
            modifiers,
            captured,
        })
    }
    pub fn key_released(code: impl Into<String>) -> Self {
        Self::Key(KeyMsg::Released { code: code.into() })
    }
    pub fn tool_pressed(index: usize) -> Self {
        Self::ToolPressed(index)
    }
}

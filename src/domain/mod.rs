//! Pure domain types with minimal dependencies
//!
//! This module contains the geometry and anchor types shared by the toolbar
//! state machine and the widgets. Types here should have no framework
//! dependencies (cosmic, iced, etc.) so they stay testable without a display.

pub mod anchor;
pub mod geometry;

pub use anchor::*;
pub use geometry::*;

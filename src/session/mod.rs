//! Toolbar session management
//!
//! This module contains:
//! - Visibility and position state with the drag session
//! - Hotkey chord detection
//! - Global listener bookkeeping
//! - Message types and iced event translation

pub mod hotkey;
pub mod listeners;
pub mod messages;
pub mod shortcuts;
pub mod state;

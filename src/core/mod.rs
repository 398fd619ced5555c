//! Showcase application
//!
//! This module contains:
//! - Application entry point and Cosmic Application implementation
//! - Preset story configurations hosted by the showcase

pub mod app;
pub mod stories;

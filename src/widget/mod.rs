//! Toolbar widgets and their replaceable rendering primitives

pub mod floating;
pub mod grip;
pub mod renderers;
pub mod toggle_button;
pub mod tool;
pub mod toolbar;

pub use floating::Floating;
pub use renderers::{ButtonRequest, CosmicRenderers, Renderers};
pub use tool::Tool;

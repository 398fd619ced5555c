//! A draggable, dismissible floating toolbar for COSMIC applications
//!
//! The toolbar hosts developer tools inside an application window. It can be
//! dragged by its grip, closed and re-opened, and toggled with a keyboard
//! chord (Meta+I by default).

pub mod config;
pub mod devbar;
pub mod domain;
pub mod localize;
pub mod session;
pub mod widget;

pub use config::DevBarSettings;
pub use devbar::DevBar;
pub use session::messages::{Event, Msg};
pub use widget::{ButtonRequest, CosmicRenderers, Renderers, Tool};

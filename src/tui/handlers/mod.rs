//! Input handler modules for different TUI contexts.

pub mod locations;
pub mod main;
pub mod popups;

// Re-export handler functions
pub use main::{dispatch_action, handle_key_event};
pub use popups::handle_popup_input;

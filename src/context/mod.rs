//! The location-context subsystem.
//!
//! Tracks where the user is, where they are headed next, and where home is,
//! and derives the dashboard's mood from that: each context switch animates
//! over a two-second window during which the mood blends from the old
//! location's preset to the new one's. The whole context survives restarts
//! through a pluggable store.
//!
//! [`ContextManager`] is the entry point; the submodules hold the pure
//! pieces it is assembled from.

pub mod interpolate;
pub mod manager;
pub mod presets;
pub mod store;
pub mod transition;

pub use interpolate::interpolate_mood_presets;
pub use manager::ContextManager;
pub use presets::{
    accent_for_intensity, default_mood_preset, resolve_mood, ACCENT_BALANCED, ACCENT_CALM,
    ACCENT_EXPRESSIVE, DEFAULT_ACCENT,
};
pub use store::{ContextStore, FileContextStore, MemoryContextStore};
pub use transition::{
    transition_progress, Clock, ManualClock, SystemClock, TransitionHandle,
    TRANSITION_DURATION_MS,
};

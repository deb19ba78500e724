//! The travel context: where the user is, where they are headed, and home.

use serde::{Deserialize, Serialize};

use super::mood::clamp_unit;
use super::{ContextRole, Location};

/// Snapshot of the travel context. This is the value persisted between runs.
///
/// Holds owned copies of its locations; directory entries are stamped with
/// roles from this snapshot by id, never the other way around. At most one
/// location can match each of the three slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationContext {
    /// Where the user is right now.
    #[serde(default)]
    pub current: Option<Location>,
    /// Where the user is headed next.
    #[serde(default)]
    pub next: Option<Location>,
    /// The user's home base.
    #[serde(default)]
    pub home: Option<Location>,
    /// Transition completion in `[0.0, 1.0]`; 1.0 means settled.
    #[serde(default = "default_progress")]
    pub transition_progress: f64,
}

const fn default_progress() -> f64 {
    1.0
}

impl LocationContext {
    /// A context with no locations, settled.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            current: None,
            next: None,
            home: None,
            transition_progress: 1.0,
        }
    }

    /// Whether any slot is occupied. Persistence only happens when this
    /// holds; an all-empty context is never written.
    #[must_use]
    pub const fn has_any(&self) -> bool {
        self.current.is_some() || self.next.is_some() || self.home.is_some()
    }

    /// Whether no transition display is in progress.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transition_progress >= 1.0
    }

    /// Role the given location id plays in this context. Slots are checked
    /// in rank order, so an id appearing in several slots gets the highest
    /// ranked role.
    #[must_use]
    pub fn role_of(&self, id: &str) -> ContextRole {
        let matches = |slot: &Option<Location>| slot.as_ref().is_some_and(|loc| loc.id == id);
        if matches(&self.current) {
            ContextRole::Current
        } else if matches(&self.next) {
            ContextRole::Next
        } else if matches(&self.home) {
            ContextRole::Home
        } else {
            ContextRole::Saved
        }
    }

    /// Clamps out-of-range values in place. Applied to snapshots read from
    /// disk, which may have been edited by hand.
    pub fn sanitize(&mut self) {
        self.transition_progress = clamp_unit(self.transition_progress);
        for slot in [&mut self.current, &mut self.next, &mut self.home] {
            if let Some(loc) = slot {
                loc.sanitize();
            }
        }
    }
}

impl Default for LocationContext {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(id: &str) -> Location {
        Location::new(id, "City", "CC")
    }

    #[test]
    fn test_empty_is_settled_and_vacant() {
        let ctx = LocationContext::empty();
        assert!(!ctx.has_any());
        assert!(ctx.is_settled());
        assert_eq!(ctx.transition_progress, 1.0);
    }

    #[test]
    fn test_role_of_checks_slots_in_rank_order() {
        let ctx = LocationContext {
            current: Some(loc("1")),
            next: Some(loc("2")),
            home: Some(loc("1")),
            transition_progress: 1.0,
        };
        assert_eq!(ctx.role_of("1"), ContextRole::Current);
        assert_eq!(ctx.role_of("2"), ContextRole::Next);
        assert_eq!(ctx.role_of("3"), ContextRole::Saved);
    }

    #[test]
    fn test_sanitize_clamps_progress() {
        let mut ctx = LocationContext {
            current: Some(loc("1")),
            next: None,
            home: None,
            transition_progress: 7.5,
        };
        ctx.sanitize();
        assert_eq!(ctx.transition_progress, 1.0);

        ctx.transition_progress = -0.5;
        ctx.sanitize();
        assert_eq!(ctx.transition_progress, 0.0);
    }

    #[test]
    fn test_missing_progress_defaults_to_settled() {
        let json = r#"{"current": null, "next": null, "home": null}"#;
        let ctx: LocationContext = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.transition_progress, 1.0);
    }
}

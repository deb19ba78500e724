//! The saved-location directory and its list operations.

use uuid::Uuid;

use crate::models::{ConditionKind, ContextRole, Location, LocationContext, HOME_LABEL};

/// Ordered collection of the user's saved locations.
///
/// The directory never decides roles on its own; it is stamped from the
/// travel context via [`sync_roles`](Self::sync_roles) after every context
/// change.
#[derive(Debug, Clone, Default)]
pub struct LocationDirectory {
    entries: Vec<Location>,
}

impl LocationDirectory {
    /// Creates a directory from existing entries.
    #[must_use]
    pub const fn new(entries: Vec<Location>) -> Self {
        Self { entries }
    }

    /// The built-in starter directory.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Location::new("1", "Littleton", "CO")
                .with_label(HOME_LABEL)
                .with_conditions(14, ConditionKind::PartlyCloudy, 16, 7)
                .favorite(),
            Location::new("2", "San Francisco", "CA")
                .with_label("Work")
                .with_conditions(13, ConditionKind::Cloudy, 15, 10),
            Location::new("3", "Dubai", "UAE")
                .with_label("Work 2")
                .with_conditions(17, ConditionKind::Sunny, 30, 20),
        ])
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.entries.iter().find(|loc| loc.id == id)
    }

    /// Adds a location with mild placeholder conditions and no role.
    /// Returns the generated id.
    pub fn add(
        &mut self,
        city: impl Into<String>,
        country: impl Into<String>,
        label: Option<String>,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        let mut location = Location::new(id.clone(), city, country)
            .with_conditions(15, ConditionKind::Sunny, 21, 9);
        location.label = label;
        self.entries.push(location);
        id
    }

    /// Removes an entry. The travel context keeps its own copies, so
    /// removing a role-holder only shrinks the directory.
    pub fn remove(&mut self, id: &str) -> Option<Location> {
        let index = self.entries.iter().position(|loc| loc.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Flips the favorite flag. Returns the new state, or `None` for an
    /// unknown id.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|loc| loc.id == id)?;
        entry.is_favorite = !entry.is_favorite;
        Some(entry.is_favorite)
    }

    /// Replaces an entry's label. Returns false for an unknown id.
    pub fn set_label(&mut self, id: &str, label: Option<String>) -> bool {
        match self.entries.iter_mut().find(|loc| loc.id == id) {
            Some(entry) => {
                entry.label = label;
                true
            }
            None => false,
        }
    }

    /// Stamps every entry's role from the travel context.
    pub fn sync_roles(&mut self, context: &LocationContext) {
        for entry in &mut self.entries {
            entry.context_role = context.role_of(&entry.id);
        }
    }

    /// Entries in display order: role rank (current, next, home, saved),
    /// favorites first within a rank, city name as the final tiebreak.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Location> {
        let mut sorted: Vec<&Location> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            a.context_role
                .rank()
                .cmp(&b.context_role.rank())
                .then_with(|| b.is_favorite.cmp(&a.is_favorite))
                .then_with(|| a.city.cmp(&b.city))
        });
        sorted
    }
}

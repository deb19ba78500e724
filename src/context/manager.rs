//! The stateful context manager.
//!
//! Owns the [`LocationContext`], drives the transition animation, resolves
//! the effective mood and accent color, and keeps the snapshot persisted.
//! Every mutation that leaves any slot occupied is followed by a
//! best-effort save; persistence failures are logged, never surfaced.

use tracing::warn;

use crate::models::{ContextRole, Location, LocationContext, MoodPreset, RgbColor};

use super::interpolate::interpolate_mood_presets;
use super::presets::{accent_for_intensity, default_mood_preset, resolve_mood};
use super::store::ContextStore;
use super::transition::{Clock, TransitionHandle};

/// Stateful owner of the travel context.
///
/// Time and storage are injected, so the manager is fully deterministic
/// under test: pair it with a
/// [`ManualClock`](super::transition::ManualClock) and a
/// [`MemoryContextStore`](super::store::MemoryContextStore).
pub struct ContextManager<S: ContextStore, C: Clock> {
    store: S,
    clock: C,
    context: LocationContext,
    active_transition: Option<TransitionHandle>,
}

impl<S: ContextStore, C: Clock> ContextManager<S, C> {
    /// Builds a manager, restoring the persisted snapshot when one exists.
    ///
    /// Without a usable snapshot, the location labeled "Home" (or the first
    /// entry, when none carries that label) becomes both current and home,
    /// settled. An empty directory yields an empty context, and nothing is
    /// persisted until a slot is filled.
    pub fn new(store: S, clock: C, directory: &[Location]) -> Self {
        let restored = match store.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "failed to read context snapshot, starting fresh");
                None
            }
        };
        let context = restored.unwrap_or_else(|| Self::elect_initial(directory));
        let mut manager = Self {
            store,
            clock,
            context,
            active_transition: None,
        };
        manager.persist();
        manager
    }

    /// First-run election: home-labeled entry, else the first one.
    fn elect_initial(directory: &[Location]) -> LocationContext {
        let Some(home) = directory
            .iter()
            .find(|loc| loc.is_home_labeled())
            .or_else(|| directory.first())
        else {
            return LocationContext::empty();
        };
        LocationContext {
            current: Some(home.clone()),
            next: None,
            home: Some(home.clone()),
            transition_progress: 1.0,
        }
    }

    /// The managed context.
    #[must_use]
    pub const fn context(&self) -> &LocationContext {
        &self.context
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Whether a transition animation is currently live.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.active_transition.is_some()
    }

    /// Makes `location` the current place and starts a fresh transition.
    ///
    /// Progress restarts at 0.0; any in-flight transition is superseded by
    /// the new handle.
    pub fn set_current(&mut self, location: Location) {
        self.context.current = Some(location);
        self.context.transition_progress = 0.0;
        self.active_transition = Some(TransitionHandle::begin(&self.clock));
        self.persist();
    }

    /// Sets or clears the next destination. Does not touch the transition.
    pub fn set_next(&mut self, location: Option<Location>) {
        self.context.next = location;
        self.persist();
    }

    /// Sets the home base. Does not touch the transition.
    pub fn set_home(&mut self, location: Location) {
        self.context.home = Some(location);
        self.persist();
    }

    /// Advances the transition animation one frame.
    ///
    /// Recomputes progress from the clock; the handle clears itself once
    /// the transition completes. Returns whether progress moved (callers
    /// use this to decide on a redraw). A frame where nothing moved writes
    /// nothing.
    pub fn tick(&mut self) -> bool {
        let Some(handle) = self.active_transition else {
            return false;
        };
        let progress = handle.progress(&self.clock);
        if handle.is_complete(&self.clock) {
            self.active_transition = None;
        }
        if progress == self.context.transition_progress {
            return false;
        }
        self.context.transition_progress = progress;
        self.persist();
        true
    }

    /// The effective mood right now.
    ///
    /// Resolves the current location's mood (explicit preset, else the
    /// label-derived default). While a next destination is set and the
    /// transition has not settled, the result is blended toward the next
    /// location's mood at the current progress. With no current location
    /// the routine default applies.
    #[must_use]
    pub fn current_mood(&self) -> MoodPreset {
        let Some(current) = &self.context.current else {
            return default_mood_preset(None);
        };
        let mood = resolve_mood(current);
        if let Some(next) = &self.context.next {
            if self.context.transition_progress < 1.0 {
                let target = resolve_mood(next);
                return interpolate_mood_presets(&mood, &target, self.context.transition_progress);
            }
        }
        mood
    }

    /// The accent color for the chrome.
    ///
    /// An explicit accent on the next destination's preset wins
    /// unconditionally (the UI hints where the user is headed); otherwise
    /// the effective mood's intensity picks from the fixed palette.
    #[must_use]
    pub fn accent_color(&self) -> RgbColor {
        if let Some(color) = self
            .context
            .next
            .as_ref()
            .and_then(|next| next.mood_preset.as_ref())
            .and_then(|preset| preset.accent_color)
        {
            return color;
        }
        accent_for_intensity(self.current_mood().visual_intensity)
    }

    /// Role the given location id plays in the managed context.
    #[must_use]
    pub fn role_of(&self, id: &str) -> ContextRole {
        self.context.role_of(id)
    }

    /// Best-effort save. An all-empty context is never written; failures
    /// are logged and swallowed.
    fn persist(&mut self) {
        if !self.context.has_any() {
            return;
        }
        if let Err(e) = self.store.save(&self.context) {
            warn!(error = %e, "failed to persist context snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::presets::{ACCENT_BALANCED, ACCENT_CALM, ACCENT_EXPRESSIVE};
    use crate::context::store::MemoryContextStore;
    use crate::context::transition::ManualClock;
    use crate::models::{ConditionKind, ContrastPreference, Purpose, VisualIntensity};
    use anyhow::Result;

    fn home() -> Location {
        Location::new("1", "Littleton", "CO")
            .with_label("Home")
            .with_conditions(14, ConditionKind::PartlyCloudy, 16, 7)
    }

    fn work() -> Location {
        Location::new("2", "San Francisco", "CA")
            .with_label("Work")
            .with_conditions(13, ConditionKind::Cloudy, 15, 10)
    }

    fn leisure() -> Location {
        Location::new("3", "Honolulu", "HI").with_label("leisure")
    }

    fn manager_with(
        directory: &[Location],
    ) -> (ContextManager<MemoryContextStore, ManualClock>, ManualClock) {
        let clock = ManualClock::at(1_000_000);
        let manager = ContextManager::new(MemoryContextStore::new(), clock.clone(), directory);
        (manager, clock)
    }

    #[test]
    fn test_init_elects_home_labeled_location() {
        let directory = vec![work(), home()];
        let (manager, _clock) = manager_with(&directory);

        let ctx = manager.context();
        assert_eq!(ctx.current.as_ref().map(|l| l.id.as_str()), Some("1"));
        assert_eq!(ctx.home.as_ref().map(|l| l.id.as_str()), Some("1"));
        assert!(ctx.next.is_none());
        assert_eq!(ctx.transition_progress, 1.0);
    }

    #[test]
    fn test_init_falls_back_to_first_location() {
        let directory = vec![work(), leisure()];
        let (manager, _clock) = manager_with(&directory);

        let ctx = manager.context();
        assert_eq!(ctx.current.as_ref().map(|l| l.id.as_str()), Some("2"));
        assert_eq!(ctx.home.as_ref().map(|l| l.id.as_str()), Some("2"));
    }

    #[test]
    fn test_init_with_home_like_but_inexact_labels() {
        // Only the exact label elects; "home" (lowercase) does not
        let directory = vec![work(), Location::new("9", "Oslo", "NO").with_label("home")];
        let (manager, _clock) = manager_with(&directory);
        assert_eq!(
            manager.context().current.as_ref().map(|l| l.id.as_str()),
            Some("2")
        );
    }

    #[test]
    fn test_init_empty_directory_persists_nothing() {
        let (manager, _clock) = manager_with(&[]);
        assert!(!manager.context().has_any());
        assert_eq!(manager.store().save_count(), 0);
        assert!(manager.store().snapshot().is_none());
    }

    #[test]
    fn test_init_persists_elected_context() {
        let directory = vec![home()];
        let (manager, _clock) = manager_with(&directory);
        assert_eq!(manager.store().save_count(), 1);
        let saved = manager.store().snapshot().unwrap();
        assert_eq!(saved, *manager.context());
    }

    #[test]
    fn test_restored_snapshot_is_adopted_verbatim() {
        let snapshot = LocationContext {
            current: Some(work()),
            next: Some(leisure()),
            home: Some(home()),
            transition_progress: 0.4,
        };
        let store = MemoryContextStore::with_snapshot(snapshot.clone());
        let manager = ContextManager::new(store, ManualClock::at(0), &[home()]);

        assert_eq!(*manager.context(), snapshot);
        // No start time is stored, so the restored transition stays frozen
        assert!(!manager.is_transitioning());
    }

    #[test]
    fn test_failing_load_starts_fresh() {
        struct BrokenStore;
        impl ContextStore for BrokenStore {
            fn load(&self) -> Result<Option<LocationContext>> {
                anyhow::bail!("disk on fire")
            }
            fn save(&self, _context: &LocationContext) -> Result<()> {
                Ok(())
            }
            fn clear(&self) -> Result<()> {
                Ok(())
            }
        }

        let directory = vec![home()];
        let manager = ContextManager::new(BrokenStore, ManualClock::at(0), &directory);
        assert_eq!(
            manager.context().current.as_ref().map(|l| l.id.as_str()),
            Some("1")
        );
    }

    #[test]
    fn test_set_current_resets_progress_and_starts_transition() {
        let directory = vec![home(), work()];
        let (mut manager, _clock) = manager_with(&directory);

        manager.set_current(work());
        assert_eq!(manager.context().transition_progress, 0.0);
        assert!(manager.is_transitioning());
        assert_eq!(
            manager.context().current.as_ref().map(|l| l.id.as_str()),
            Some("2")
        );
    }

    #[test]
    fn test_tick_advances_and_settles() {
        let directory = vec![home(), work()];
        let (mut manager, clock) = manager_with(&directory);
        manager.set_current(work());

        clock.advance(1000);
        assert!(manager.tick());
        assert_eq!(manager.context().transition_progress, 0.5);
        assert!(manager.is_transitioning());

        clock.advance(1500);
        assert!(manager.tick());
        assert_eq!(manager.context().transition_progress, 1.0);
        assert!(!manager.is_transitioning());

        // Settled: further ticks neither move nor write
        let saves = manager.store().save_count();
        assert!(!manager.tick());
        assert_eq!(manager.store().save_count(), saves);
    }

    #[test]
    fn test_tick_without_movement_does_not_write() {
        let directory = vec![home(), work()];
        let (mut manager, _clock) = manager_with(&directory);
        manager.set_current(work());

        let saves = manager.store().save_count();
        // Clock has not moved since set_current, so progress stays 0.0
        assert!(!manager.tick());
        assert_eq!(manager.store().save_count(), saves);
    }

    #[test]
    fn test_new_transition_supersedes_old_one() {
        let directory = vec![home(), work(), leisure()];
        let (mut manager, clock) = manager_with(&directory);

        manager.set_current(work());
        clock.advance(1500);
        manager.tick();
        assert_eq!(manager.context().transition_progress, 0.75);

        manager.set_current(leisure());
        assert_eq!(manager.context().transition_progress, 0.0);
        clock.advance(1000);
        manager.tick();
        // Progress tracks the new start, not the superseded one
        assert_eq!(manager.context().transition_progress, 0.5);
    }

    #[test]
    fn test_set_next_and_home_leave_progress_alone() {
        let directory = vec![home(), work()];
        let (mut manager, clock) = manager_with(&directory);
        manager.set_current(work());
        clock.advance(500);
        manager.tick();
        let progress = manager.context().transition_progress;

        manager.set_next(Some(leisure()));
        assert_eq!(manager.context().transition_progress, progress);

        manager.set_home(home());
        assert_eq!(manager.context().transition_progress, progress);

        manager.set_next(None);
        assert!(manager.context().next.is_none());
    }

    #[test]
    fn test_every_mutation_persists() {
        let directory = vec![home(), work()];
        let (mut manager, clock) = manager_with(&directory);
        let mut expected = manager.store().save_count();

        manager.set_current(work());
        expected += 1;
        assert_eq!(manager.store().save_count(), expected);

        manager.set_next(Some(leisure()));
        expected += 1;
        assert_eq!(manager.store().save_count(), expected);

        manager.set_home(home());
        expected += 1;
        assert_eq!(manager.store().save_count(), expected);

        clock.advance(100);
        manager.tick();
        expected += 1;
        assert_eq!(manager.store().save_count(), expected);

        let saved = manager.store().snapshot().unwrap();
        assert_eq!(saved, *manager.context());
    }

    #[test]
    fn test_save_failures_are_swallowed() {
        let directory = vec![home(), work()];
        let (mut manager, clock) = manager_with(&directory);

        manager.store().fail_saves(true);
        manager.set_current(work());
        clock.advance(1000);
        manager.tick();
        manager.set_next(Some(leisure()));

        // State advanced normally despite every save failing
        assert_eq!(manager.context().transition_progress, 0.5);
        assert_eq!(
            manager.context().next.as_ref().map(|l| l.id.as_str()),
            Some("3")
        );
    }

    #[test]
    fn test_current_mood_uses_label_derived_default() {
        let directory = vec![work()];
        let (manager, _clock) = manager_with(&directory);

        let mood = manager.current_mood();
        assert_eq!(mood.visual_intensity, VisualIntensity::Calm);
        assert_eq!(mood.sound_level, 0.3);
        assert_eq!(mood.contrast_preference, ContrastPreference::High);
    }

    #[test]
    fn test_current_mood_prefers_explicit_preset() {
        let preset = MoodPreset::new(VisualIntensity::Expressive, 0.8, ContrastPreference::High);
        let loc = home().with_mood(preset.clone());
        let directory = vec![loc];
        let (manager, _clock) = manager_with(&directory);
        assert_eq!(manager.current_mood(), preset);
    }

    #[test]
    fn test_no_current_location_means_routine_mood() {
        let (manager, _clock) = manager_with(&[]);
        assert_eq!(manager.current_mood().purpose, Some(Purpose::Routine));
    }

    #[test]
    fn test_mood_blends_toward_next_mid_transition() {
        let directory = vec![home(), work(), leisure()];
        let (mut manager, clock) = manager_with(&directory);
        manager.set_current(work()); // calm 0.3
        manager.set_next(Some(leisure())); // expressive 0.6

        clock.advance(1000); // progress 0.5
        manager.tick();

        let mood = manager.current_mood();
        assert!((mood.sound_level - 0.45).abs() < 1e-12);
        // Discrete fields already switched at the halfway point
        assert_eq!(mood.visual_intensity, VisualIntensity::Expressive);

        clock.advance(1000); // settled
        manager.tick();
        assert_eq!(manager.current_mood().sound_level, 0.3);
        assert_eq!(manager.current_mood().visual_intensity, VisualIntensity::Calm);
    }

    #[test]
    fn test_accent_color_from_intensity_palette() {
        let directory = vec![work()];
        let (manager, _clock) = manager_with(&directory);
        assert_eq!(manager.accent_color(), ACCENT_CALM);

        let directory = vec![leisure()];
        let (manager, _clock) = manager_with(&directory);
        assert_eq!(manager.accent_color(), ACCENT_EXPRESSIVE);

        let directory = vec![home()];
        let (manager, _clock) = manager_with(&directory);
        assert_eq!(manager.accent_color(), ACCENT_BALANCED);
    }

    #[test]
    fn test_next_explicit_accent_wins() {
        let directory = vec![home(), work()];
        let (mut manager, _clock) = manager_with(&directory);

        let tinted = leisure().with_mood(
            MoodPreset::new(VisualIntensity::Calm, 0.1, ContrastPreference::Standard)
                .with_accent_color(RgbColor::new(0xAB, 0xCD, 0xEF)),
        );
        manager.set_next(Some(tinted));
        assert_eq!(manager.accent_color(), RgbColor::new(0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn test_role_of_reflects_context() {
        let directory = vec![home(), work(), leisure()];
        let (mut manager, _clock) = manager_with(&directory);
        manager.set_next(Some(work()));

        assert_eq!(manager.role_of("1"), ContextRole::Current);
        assert_eq!(manager.role_of("2"), ContextRole::Next);
        assert_eq!(manager.role_of("3"), ContextRole::Saved);
    }

    #[test]
    fn test_round_trip_through_new_manager() {
        let directory = vec![home(), work()];
        let clock = ManualClock::at(50_000);
        let store = MemoryContextStore::new();
        let mut manager = ContextManager::new(store, clock.clone(), &directory);
        manager.set_current(work());
        manager.set_next(Some(leisure()));
        clock.advance(2500);
        manager.tick();

        let saved = manager.store().snapshot().unwrap();
        let revived = ContextManager::new(
            MemoryContextStore::with_snapshot(saved.clone()),
            ManualClock::at(99_999),
            &directory,
        );
        assert_eq!(*revived.context(), saved);
        assert_eq!(revived.context().transition_progress, 1.0);
    }
}

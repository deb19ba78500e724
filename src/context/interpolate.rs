//! Blending between two mood presets during a transition.

use crate::models::{clamp_unit, MoodPreset};

/// Blends two mood presets at the given progress.
///
/// Sound level is interpolated linearly; every discrete field (intensity,
/// contrast, purpose, accent color) switches from the source to the target
/// at the halfway point. Progress outside `[0.0, 1.0]` is clamped first, so
/// progress 0 returns exactly `from` and progress 1 exactly `to`.
#[must_use]
pub fn interpolate_mood_presets(from: &MoodPreset, to: &MoodPreset, progress: f64) -> MoodPreset {
    let t = clamp_unit(progress);
    // Two-coefficient form keeps both endpoints exact.
    let sound_level = clamp_unit(from.sound_level * (1.0 - t) + to.sound_level * t);
    let side = if t < 0.5 { from } else { to };
    MoodPreset {
        visual_intensity: side.visual_intensity,
        sound_level,
        contrast_preference: side.contrast_preference,
        accent_color: side.accent_color,
        purpose: side.purpose,
    }
}

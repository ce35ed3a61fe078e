//! Track geometry
//!
//! Radii are derived from the track index rather than stored: each track
//! sits one fixed gap inside the previous one.

/// Radius of the outermost track, in pixels.
pub const BASE_RADIUS: f32 = 80.0;

/// Radial gap between neighboring tracks, in pixels.
pub const TRACK_GAP: f32 = 30.0;

/// Radius of the track at `track_index` (0 = outermost).
pub fn radius(track_index: usize) -> f32 {
    BASE_RADIUS - TRACK_GAP * track_index as f32
}

/// Offset of a runner marker from the track center for a given angle.
pub fn marker_offset(track_index: usize, angle: f64) -> (f32, f32) {
    let r = radius(track_index);
    (angle.cos() as f32 * r, angle.sin() as f32 * r)
}

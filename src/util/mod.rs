//! Shared utilities: easing curves and frame timing.

/// Easing curves for tweens.
pub mod easing;
/// Frame clock producing capped time deltas.
pub mod frame_timing;

use web_time::{Duration, Instant};

/// Frame clock feeding tween time deltas, with an FPS readout.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single delta so a backgrounded tab does not
    /// complete a tween in one jump.
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a clock whose per-frame delta never exceeds `max_delta`.
    #[must_use]
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Mark the start of a frame and return the time elapsed since the
    /// previous one, capped at `max_delta`.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

/// Convert a host-reported frame delta in milliseconds (e.g. from
/// `requestAnimationFrame`) into a `Duration`.
///
/// Negative, non-finite or unrepresentable values become zero.
#[must_use]
pub fn millis_to_duration(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms.max(0.0) / 1000.0).unwrap_or(Duration::ZERO)
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_capped() {
        let mut timing = FrameTiming::new(Duration::ZERO);
        assert_eq!(timing.tick(), Duration::ZERO);
    }

    #[test]
    fn millis_convert_and_bad_values_become_zero() {
        assert_eq!(millis_to_duration(16.0), Duration::from_millis(16));
        assert_eq!(millis_to_duration(-5.0), Duration::ZERO);
        assert_eq!(millis_to_duration(f64::NAN), Duration::ZERO);
        assert_eq!(millis_to_duration(f64::INFINITY), Duration::ZERO);
        assert_eq!(millis_to_duration(f64::MAX), Duration::ZERO);
    }

    #[test]
    fn fps_starts_at_sensible_default() {
        let timing = FrameTiming::default();
        assert_eq!(timing.fps(), 60.0);
    }
}

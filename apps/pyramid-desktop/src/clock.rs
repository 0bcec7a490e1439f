use std::time::Instant;

/// Elapsed time between rendered frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
    max_delta: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self::starting_at(Instant::now(), max_delta)
    }

    pub fn starting_at(start: Instant, max_delta: f32) -> Self {
        Self {
            last: start,
            max_delta,
        }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Seconds since the previous tick, capped at `max_delta`.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(self.max_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn measures_elapsed_time() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 0.1);
        let dt = clock.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
        let dt = clock.tick_at(start + Duration::from_millis(48));
        assert!((dt - 0.032).abs() < 1e-6);
    }

    #[test]
    fn caps_long_frames() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 0.1);
        assert_eq!(clock.tick_at(start + Duration::from_secs(3)), 0.1);
    }

    #[test]
    fn never_negative() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(start, 0.1);
        assert_eq!(clock.tick_at(start - Duration::from_millis(500)), 0.0);
    }
}

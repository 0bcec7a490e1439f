use glam::Vec2;

/// Pixel distance treated as one wheel line for touchpads and precise wheels.
pub const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

pub fn scroll_lines_from_pixels(pixels: f32) -> f32 {
    pixels / PIXELS_PER_SCROLL_LINE
}

/// Turns absolute cursor positions into look offsets.
///
/// The first sample after creation or [`MouseTracker::reset`] only seeds the
/// last position and yields a zero offset, so regaining focus never produces
/// a jump.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseTracker {
    last: Option<Vec2>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset since the previous sample. Y is reversed because window
    /// coordinates grow downwards while pitch grows upwards.
    pub fn offset(&mut self, x: f32, y: f32) -> Vec2 {
        let current = Vec2::new(x, y);
        let last = self.last.replace(current).unwrap_or(current);
        Vec2::new(current.x - last.x, last.y - current.y)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn last_position(&self) -> Option<Vec2> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_zero() {
        let mut tracker = MouseTracker::new();
        assert_eq!(tracker.offset(400.0, 300.0), Vec2::ZERO);
        assert_eq!(tracker.last_position(), Some(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn first_sample_seeds_y_from_y() {
        let mut tracker = MouseTracker::new();
        tracker.offset(700.0, 100.0);
        // A purely horizontal move must not produce vertical look.
        assert_eq!(tracker.offset(710.0, 100.0), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn y_offset_is_reversed() {
        let mut tracker = MouseTracker::new();
        tracker.offset(0.0, 100.0);
        assert_eq!(tracker.offset(0.0, 90.0), Vec2::new(0.0, 10.0));
        assert_eq!(tracker.offset(5.0, 120.0), Vec2::new(5.0, -30.0));
    }

    #[test]
    fn reset_reseeds() {
        let mut tracker = MouseTracker::new();
        tracker.offset(10.0, 10.0);
        tracker.reset();
        assert_eq!(tracker.offset(500.0, 500.0), Vec2::ZERO);
    }

    #[test]
    fn pixel_scroll_converts_to_lines() {
        assert_eq!(scroll_lines_from_pixels(40.0), 2.0);
        assert_eq!(scroll_lines_from_pixels(-20.0), -1.0);
    }
}

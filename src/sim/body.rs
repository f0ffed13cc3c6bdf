//! Bodies and the viewport they move in

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rectangular bounds, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Per-axis speed magnitude, half-open `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw a magnitude from the range and give it a random sign
    pub fn sample_signed<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        // Empty range collapses to `min` (rand panics on empty ranges)
        let magnitude = if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        };
        if rng.random_bool(0.5) {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// A moving rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per second
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    /// Body at `pos` with a freshly randomized velocity on both axes
    pub fn with_random_velocity<R: Rng + ?Sized>(
        pos: Vec2,
        size: Vec2,
        speed: &SpeedRange,
        rng: &mut R,
    ) -> Self {
        let vel = Vec2::new(speed.sample_signed(rng), speed.sample_signed(rng));
        Self { pos, size, vel }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Point-in-rectangle test, edges inclusive
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        self.pos.x <= point.x && point.x <= max.x && self.pos.y <= point.y && point.y <= max.y
    }

    /// Whether the whole rectangle lies inside the viewport
    pub fn is_within(&self, viewport: &Viewport) -> bool {
        let max = self.max();
        self.pos.x >= 0.0 && self.pos.y >= 0.0 && max.x <= viewport.width && max.y <= viewport.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_contains_edges_inclusive() {
        let body = Body::new(Vec2::new(10.0, 20.0), Vec2::new(50.0, 50.0), Vec2::ZERO);

        assert!(body.contains(Vec2::new(10.0, 20.0)));
        assert!(body.contains(Vec2::new(60.0, 70.0)));
        assert!(body.contains(Vec2::new(35.0, 45.0)));
        assert!(!body.contains(Vec2::new(9.9, 45.0)));
        assert!(!body.contains(Vec2::new(35.0, 70.1)));
    }

    #[test]
    fn test_sample_signed_magnitude_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let range = SpeedRange::new(20.0, 100.0);

        let mut saw_negative = false;
        let mut saw_positive = false;
        for _ in 0..500 {
            let v = range.sample_signed(&mut rng);
            assert!(v.abs() >= 20.0 && v.abs() < 100.0, "speed {} out of range", v);
            saw_negative |= v < 0.0;
            saw_positive |= v > 0.0;
        }
        assert!(saw_negative && saw_positive);
    }

    #[test]
    fn test_sample_signed_empty_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        let range = SpeedRange::new(40.0, 40.0);

        for _ in 0..10 {
            assert_eq!(range.sample_signed(&mut rng).abs(), 40.0);
        }
    }

    #[test]
    fn test_is_within() {
        let viewport = Viewport::new(800.0, 600.0);
        let size = Vec2::splat(50.0);

        assert!(Body::new(Vec2::new(750.0, 550.0), size, Vec2::ZERO).is_within(&viewport));
        assert!(!Body::new(Vec2::new(751.0, 0.0), size, Vec2::ZERO).is_within(&viewport));
        assert!(!Body::new(Vec2::new(0.0, -1.0), size, Vec2::ZERO).is_within(&viewport));
    }
}

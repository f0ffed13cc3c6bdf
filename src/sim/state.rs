//! Simulation state and body bookkeeping
//!
//! Everything a renderer reads each frame lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, SpeedRange, Viewport};
use crate::consts::*;

/// Lifecycle of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Ticks advance bodies
    Running,
    /// Terminal; ticks are ignored
    Stopped,
}

/// Tuning shared by every body in a simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Width/height of newly spawned bodies
    pub body_size: Vec2,
    /// Velocity magnitude range per axis
    pub speed: SpeedRange,
    /// Upper bound on a single tick's elapsed time (seconds)
    pub max_dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            body_size: Vec2::splat(DEFAULT_BODY_SIZE),
            speed: SpeedRange::new(CANVAS_SPEED_MIN, CANVAS_SPEED_MAX),
            max_dt: MAX_FRAME_DT,
        }
    }
}

/// Bounded motion simulation
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Bounds, rewritten on resize
    pub viewport: Viewport,
    /// Bodies in insertion order
    pub bodies: Vec<Body>,
    pub config: SimConfig,
    phase: SimPhase,
    /// Timestamp (ms) of the last `advance`
    pub(crate) last_time_ms: Option<f64>,
    rng: Pcg32,
}

impl Simulation {
    /// Create an empty, running simulation
    pub fn new(viewport: Viewport, config: SimConfig, seed: u64) -> Self {
        Self {
            viewport,
            bodies: Vec::new(),
            config,
            phase: SimPhase::Running,
            last_time_ms: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    /// Stop the simulation for good
    pub fn stop(&mut self) {
        if self.phase == SimPhase::Running {
            log::info!("Simulation stopped with {} bodies", self.bodies.len());
        }
        self.phase = SimPhase::Stopped;
    }

    pub fn last_time_ms(&self) -> Option<f64> {
        self.last_time_ms
    }

    /// Replace the viewport; bodies are pulled back in on the next tick
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Add `count` bodies at random positions inside the viewport
    pub fn populate(&mut self, count: u32) {
        let size = self.config.body_size;
        let max_x = (self.viewport.width - size.x).max(0.0);
        let max_y = (self.viewport.height - size.y).max(0.0);

        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.random_range(0.0..=max_x),
                self.rng.random_range(0.0..=max_y),
            );
            let body = Body::with_random_velocity(pos, size, &self.config.speed, &mut self.rng);
            self.bodies.push(body);
        }
    }

    /// Index of the first body (insertion order) containing the point
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let point = Vec2::new(x, y);
        self.bodies.iter().position(|b| b.contains(point))
    }

    /// Clone the body at `index` into a new body with a fresh velocity.
    /// Returns the new body's index.
    pub fn spawn(&mut self, index: usize) -> Option<usize> {
        let origin = self.bodies.get(index)?.pos;
        let body = Body::with_random_velocity(
            origin,
            self.config.body_size,
            &self.config.speed,
            &mut self.rng,
        );
        self.bodies.push(body);
        log::debug!(
            "Spawned body {} at ({:.1}, {:.1})",
            self.bodies.len() - 1,
            origin.x,
            origin.y
        );
        Some(self.bodies.len() - 1)
    }

    /// Pointer handler: spawn from whatever body is under (x, y)
    pub fn spawn_at_point(&mut self, x: f32, y: f32) -> Option<usize> {
        let hit = self.hit_test(x, y)?;
        self.spawn(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sim() -> Simulation {
        Simulation::new(Viewport::new(800.0, 600.0), SimConfig::default(), 12345)
    }

    #[test]
    fn test_new_is_running_and_empty() {
        let sim = test_sim();
        assert_eq!(sim.phase(), SimPhase::Running);
        assert!(sim.is_empty());
        assert_eq!(sim.last_time_ms(), None);
    }

    #[test]
    fn test_stop_is_terminal() {
        let mut sim = test_sim();
        sim.stop();
        assert!(!sim.is_running());
        sim.stop();
        assert_eq!(sim.phase(), SimPhase::Stopped);
    }

    #[test]
    fn test_populate_places_bodies_inside() {
        let mut sim = test_sim();
        sim.populate(100);

        assert_eq!(sim.len(), 100);
        for body in &sim.bodies {
            assert!(body.is_within(&sim.viewport), "{:?} escaped", body);
            assert_eq!(body.size, Vec2::splat(DEFAULT_BODY_SIZE));
        }
    }

    #[test]
    fn test_populate_viewport_smaller_than_body() {
        let mut sim = Simulation::new(Viewport::new(20.0, 20.0), SimConfig::default(), 3);
        sim.populate(3);
        for body in &sim.bodies {
            assert_eq!(body.pos, Vec2::ZERO);
        }
    }

    #[test]
    fn test_hit_test_first_in_insertion_order() {
        let mut sim = test_sim();
        let size = Vec2::splat(50.0);
        sim.bodies.push(Body::new(Vec2::new(100.0, 100.0), size, Vec2::ZERO));
        sim.bodies.push(Body::new(Vec2::new(120.0, 120.0), size, Vec2::ZERO));

        assert_eq!(sim.hit_test(130.0, 130.0), Some(0));
        assert_eq!(sim.hit_test(165.0, 165.0), Some(1));
        assert_eq!(sim.hit_test(10.0, 10.0), None);
    }

    #[test]
    fn test_spawn_clones_position() {
        let mut sim = test_sim();
        sim.bodies.push(Body::new(
            Vec2::new(300.0, 200.0),
            Vec2::splat(50.0),
            Vec2::new(60.0, -60.0),
        ));

        let new_index = sim.spawn(0);
        assert_eq!(new_index, Some(1));
        assert_eq!(sim.len(), 2);
        assert_eq!(sim.bodies[1].pos, Vec2::new(300.0, 200.0));

        let speed = sim.config.speed;
        let vel = sim.bodies[1].vel;
        assert!(vel.x.abs() >= speed.min && vel.x.abs() < speed.max);
        assert!(vel.y.abs() >= speed.min && vel.y.abs() < speed.max);
    }

    #[test]
    fn test_spawn_invalid_index() {
        let mut sim = test_sim();
        assert_eq!(sim.spawn(0), None);
        assert!(sim.is_empty());
    }

    #[test]
    fn test_spawn_at_point() {
        let mut sim = test_sim();
        sim.bodies.push(Body::new(Vec2::new(0.0, 0.0), Vec2::splat(50.0), Vec2::ZERO));

        assert_eq!(sim.spawn_at_point(400.0, 400.0), None);
        assert_eq!(sim.len(), 1);

        assert_eq!(sim.spawn_at_point(25.0, 25.0), Some(1));
        assert_eq!(sim.len(), 2);
        assert_eq!(sim.bodies[1].pos, Vec2::ZERO);
    }

    #[test]
    fn test_resize() {
        let mut sim = test_sim();
        sim.resize(1024.0, 768.0);
        assert_eq!(sim.viewport, Viewport::new(1024.0, 768.0));
    }

    #[test]
    fn test_same_seed_same_bodies() {
        let mut a = test_sim();
        let mut b = test_sim();
        a.populate(5);
        b.populate(5);
        assert_eq!(a.bodies, b.bodies);
    }
}

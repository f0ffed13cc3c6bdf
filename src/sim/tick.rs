//! Per-frame position update and wall reflection
//!
//! Axes are resolved independently, so x/y order does not matter.

use super::body::{Body, Viewport};
use super::state::Simulation;

/// Advance every body by `elapsed` seconds.
///
/// Elapsed time is clamped to `config.max_dt` so a stalled frame (tab in the
/// background, debugger pause) cannot carry a body through a wall.
pub fn tick(sim: &mut Simulation, elapsed: f32) {
    if !sim.is_running() {
        return;
    }

    let dt = clamp_dt(elapsed, sim.config.max_dt);
    if dt <= 0.0 {
        return;
    }

    let viewport = sim.viewport;
    for body in &mut sim.bodies {
        step_body(body, dt, &viewport);
    }
}

/// Frame-clock entry point: tick by the time since the previous call.
///
/// `now_ms` is a millisecond timestamp (`requestAnimationFrame` time or
/// `Date.now()`). The first call only records the timestamp.
pub fn advance(sim: &mut Simulation, now_ms: f64) {
    if !sim.is_running() {
        return;
    }

    let elapsed = match sim.last_time_ms.replace(now_ms) {
        Some(prev) => ((now_ms - prev) * 1e-3) as f32,
        None => 0.0,
    };
    tick(sim, elapsed);
}

/// Clamp elapsed seconds into `[0, max_dt]`; NaN becomes 0
pub fn clamp_dt(elapsed: f32, max_dt: f32) -> f32 {
    elapsed.max(0.0).min(max_dt)
}

/// Integrate one body and bounce it off the viewport walls
pub fn step_body(body: &mut Body, dt: f32, viewport: &Viewport) {
    body.pos += body.vel * dt;

    let (x, vx) = bounce_axis(body.pos.x, body.vel.x, body.size.x, viewport.width);
    let (y, vy) = bounce_axis(body.pos.y, body.vel.y, body.size.y, viewport.height);

    body.pos.x = x;
    body.pos.y = y;
    body.vel.x = vx;
    body.vel.y = vy;
}

/// Resolve one axis against `[0, limit]`, returning (position, velocity)
fn bounce_axis(mut pos: f32, mut vel: f32, extent: f32, limit: f32) -> (f32, f32) {
    if pos < 0.0 {
        pos = 0.0;
        vel = -vel;
    }
    if pos + extent > limit {
        pos = limit - extent;
        vel = -vel;
    }
    (pos, vel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_FRAME_DT;
    use crate::sim::state::{SimConfig, SimPhase};
    use glam::Vec2;
    use proptest::prelude::*;

    fn sim_with(body: Body) -> Simulation {
        let mut sim = Simulation::new(Viewport::new(800.0, 600.0), SimConfig::default(), 1);
        sim.bodies.push(body);
        sim
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut sim = sim_with(Body::new(Vec2::ZERO, Vec2::splat(50.0), Vec2::new(60.0, 0.0)));

        tick(&mut sim, 1.0);

        let body = sim.bodies[0];
        assert!((body.pos.x - 6.0).abs() < 1e-4, "x = {}", body.pos.x);
        assert_eq!(body.pos.y, 0.0);
        assert_eq!(body.vel, Vec2::new(60.0, 0.0));
    }

    #[test]
    fn test_reflects_off_right_wall() {
        let mut sim = sim_with(Body::new(
            Vec2::new(749.0, 100.0),
            Vec2::splat(50.0),
            Vec2::new(60.0, 0.0),
        ));

        tick(&mut sim, 0.1);

        let body = sim.bodies[0];
        assert_eq!(body.pos.x, 750.0);
        assert_eq!(body.vel.x, -60.0);
    }

    #[test]
    fn test_reflects_off_top_and_left() {
        let mut sim = sim_with(Body::new(
            Vec2::new(2.0, 1.0),
            Vec2::splat(50.0),
            Vec2::new(-40.0, -30.0),
        ));

        tick(&mut sim, 0.1);

        let body = sim.bodies[0];
        assert_eq!(body.pos, Vec2::ZERO);
        assert_eq!(body.vel, Vec2::new(40.0, 30.0));
    }

    #[test]
    fn test_zero_tick_is_noop() {
        let start = Body::new(Vec2::new(10.0, 10.0), Vec2::splat(50.0), Vec2::new(80.0, -20.0));
        let mut sim = sim_with(start);

        tick(&mut sim, 0.0);
        assert_eq!(sim.bodies[0], start);

        tick(&mut sim, -3.0);
        assert_eq!(sim.bodies[0], start);

        tick(&mut sim, f32::NAN);
        assert_eq!(sim.bodies[0], start);
    }

    #[test]
    fn test_stopped_ignores_ticks() {
        let start = Body::new(Vec2::new(10.0, 10.0), Vec2::splat(50.0), Vec2::new(80.0, -20.0));
        let mut sim = sim_with(start);
        sim.stop();
        assert_eq!(sim.phase(), SimPhase::Stopped);

        tick(&mut sim, 0.05);
        advance(&mut sim, 1000.0);
        advance(&mut sim, 1016.0);

        assert_eq!(sim.bodies[0], start);
        assert_eq!(sim.last_time_ms(), None);
    }

    #[test]
    fn test_advance_uses_timestamps() {
        let mut sim = sim_with(Body::new(
            Vec2::new(100.0, 100.0),
            Vec2::splat(50.0),
            Vec2::new(100.0, 0.0),
        ));

        // First frame only primes the clock
        advance(&mut sim, 5000.0);
        assert_eq!(sim.bodies[0].pos.x, 100.0);
        assert_eq!(sim.last_time_ms(), Some(5000.0));

        advance(&mut sim, 5050.0);
        assert!((sim.bodies[0].pos.x - 105.0).abs() < 1e-3);

        // Backgrounded tab: 10 s gap still moves at most max_dt
        advance(&mut sim, 15050.0);
        let expected = 105.0 + 100.0 * MAX_FRAME_DT;
        assert!((sim.bodies[0].pos.x - expected).abs() < 1e-3);
    }

    #[test]
    fn test_shrinking_viewport_pulls_body_in() {
        let mut sim = sim_with(Body::new(
            Vec2::new(700.0, 500.0),
            Vec2::splat(50.0),
            Vec2::new(20.0, 20.0),
        ));
        sim.resize(400.0, 300.0);

        tick(&mut sim, 0.016);

        let body = sim.bodies[0];
        assert_eq!(body.pos, Vec2::new(350.0, 250.0));
        assert_eq!(body.vel, Vec2::new(-20.0, -20.0));
    }

    #[test]
    fn test_clamp_dt() {
        assert_eq!(clamp_dt(0.016, 0.1), 0.016);
        assert_eq!(clamp_dt(5.0, 0.1), 0.1);
        assert_eq!(clamp_dt(-1.0, 0.1), 0.0);
        assert_eq!(clamp_dt(f32::NAN, 0.1), 0.0);
    }

    fn arb_body() -> impl Strategy<Value = Body> {
        (
            0.0f32..750.0,
            0.0f32..550.0,
            -300.0f32..300.0,
            -300.0f32..300.0,
        )
            .prop_map(|(x, y, vx, vy)| {
                Body::new(Vec2::new(x, y), Vec2::splat(50.0), Vec2::new(vx, vy))
            })
    }

    proptest! {
        #[test]
        fn prop_bodies_stay_in_bounds(
            bodies in prop::collection::vec(arb_body(), 1..8),
            frames in prop::collection::vec(0.0f32..2.0, 1..60),
        ) {
            let mut sim = Simulation::new(Viewport::new(800.0, 600.0), SimConfig::default(), 9);
            sim.bodies = bodies;

            for dt in frames {
                tick(&mut sim, dt);
                for body in &sim.bodies {
                    prop_assert!(body.is_within(&sim.viewport), "escaped: {:?}", body);
                }
            }
        }

        #[test]
        fn prop_speed_is_preserved(
            bodies in prop::collection::vec(arb_body(), 1..8),
            frames in prop::collection::vec(0.0f32..0.5, 1..120),
        ) {
            let mut sim = Simulation::new(Viewport::new(800.0, 600.0), SimConfig::default(), 9);
            let speeds: Vec<Vec2> = bodies.iter().map(|b| b.vel.abs()).collect();
            sim.bodies = bodies;

            for dt in frames {
                tick(&mut sim, dt);
            }

            for (body, speed) in sim.bodies.iter().zip(speeds) {
                prop_assert_eq!(body.vel.abs(), speed);
            }
        }
    }
}

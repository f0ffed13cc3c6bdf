//! Bounded motion simulation
//!
//! Pure and renderer-agnostic:
//! - Bodies move by velocity × elapsed time
//! - Walls reflect the crossing axis only
//! - Elapsed time is clamped per tick
//! - Seeded RNG only (velocities and initial placement)

pub mod body;
pub mod state;
pub mod tick;

pub use body::{Body, SpeedRange, Viewport};
pub use state::{SimConfig, SimPhase, Simulation};
pub use tick::{advance, clamp_dt, step_body, tick};

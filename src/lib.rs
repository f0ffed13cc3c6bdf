//! Bounce Bench - bouncing rectangles, several ways to draw them
//!
//! Core modules:
//! - `sim`: Bounded motion simulation (integration, wall reflection, spawning)
//! - `renderer`: Pluggable rendering strategies (DOM, canvas, WebGPU)
//! - `platform`: Browser glue (pointer input, intro page)
//! - `settings`: Strategy selection and per-variant tuning
//! - `stats`: Frame-rate tracking for the HUD

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod stats;

pub use settings::{RenderStrategy, Settings};
pub use stats::FrameStats;

/// Demo configuration constants
pub mod consts {
    /// Longest tick the simulation will integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Side length of a spawned body (pixels)
    pub const DEFAULT_BODY_SIZE: f32 = 50.0;

    /// Bodies created at startup
    pub const DEFAULT_INITIAL_BODIES: u32 = 1;

    /// DOM variants move slowly; each body is a styled element
    pub const DOM_SPEED_MIN: f32 = 20.0;
    pub const DOM_SPEED_MAX: f32 = 50.0;

    /// Canvas variant
    pub const CANVAS_SPEED_MIN: f32 = 20.0;
    pub const CANVAS_SPEED_MAX: f32 = 100.0;

    /// GPU variant, fast enough to make thousands of quads look busy
    pub const GPU_SPEED_MIN: f32 = 200.0;
    pub const GPU_SPEED_MAX: f32 = 300.0;

    /// Frames averaged by the FPS counter
    pub const STATS_WINDOW: usize = 60;
}

//! Demo settings
//!
//! Persisted in LocalStorage; the page query string can override them
//! (`?renderer=dom-transform&count=200`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{SimConfig, SpeedRange};

/// How bodies are presented on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RenderStrategy {
    /// One `div` per body, positioned with `left`/`top`
    DomAbsolute,
    /// One `div` per body, positioned with `transform: translate3d`
    DomTransform,
    /// All bodies filled as one path on a 2D canvas
    #[default]
    Canvas,
    /// Quads in one vertex buffer through WebGPU/WebGL
    Gpu,
}

impl RenderStrategy {
    pub const ALL: [RenderStrategy; 4] = [
        RenderStrategy::DomAbsolute,
        RenderStrategy::DomTransform,
        RenderStrategy::Canvas,
        RenderStrategy::Gpu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStrategy::DomAbsolute => "dom-absolute",
            RenderStrategy::DomTransform => "dom-transform",
            RenderStrategy::Canvas => "canvas",
            RenderStrategy::Gpu => "gpu",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dom-absolute" | "absolute" | "dom" => Some(RenderStrategy::DomAbsolute),
            "dom-transform" | "transform" | "css" => Some(RenderStrategy::DomTransform),
            "canvas" | "2d" => Some(RenderStrategy::Canvas),
            "gpu" | "webgpu" | "webgl" => Some(RenderStrategy::Gpu),
            _ => None,
        }
    }

    /// Speed range the variant was tuned with
    pub fn speed_range(&self) -> SpeedRange {
        match self {
            RenderStrategy::DomAbsolute | RenderStrategy::DomTransform => {
                SpeedRange::new(DOM_SPEED_MIN, DOM_SPEED_MAX)
            }
            RenderStrategy::Canvas => SpeedRange::new(CANVAS_SPEED_MIN, CANVAS_SPEED_MAX),
            RenderStrategy::Gpu => SpeedRange::new(GPU_SPEED_MIN, GPU_SPEED_MAX),
        }
    }
}

/// Demo settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Rendering strategy
    pub strategy: RenderStrategy,

    // === Simulation ===
    /// Side length of spawned bodies (pixels)
    pub body_size: f32,
    /// Velocity magnitude range per axis (pixels/second)
    pub speed: SpeedRange,
    /// Longest frame the simulation integrates (seconds)
    pub max_frame_dt: f32,
    /// Bodies created at startup
    pub initial_bodies: u32,

    // === HUD ===
    /// Show FPS and body count
    #[serde(default = "default_show_stats")]
    pub show_stats: bool,
}

fn default_show_stats() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_strategy(RenderStrategy::default())
    }
}

impl Settings {
    /// Settings with the tuning a strategy was built around
    pub fn for_strategy(strategy: RenderStrategy) -> Self {
        Self {
            strategy,
            body_size: DEFAULT_BODY_SIZE,
            speed: strategy.speed_range(),
            max_frame_dt: MAX_FRAME_DT,
            initial_bodies: DEFAULT_INITIAL_BODIES,
            show_stats: true,
        }
    }

    /// Switch strategy, taking on its speed tuning
    pub fn apply_strategy(&mut self, strategy: RenderStrategy) {
        self.strategy = strategy;
        self.speed = strategy.speed_range();
    }

    /// Apply overrides from a URL query string (with or without leading `?`).
    /// Unknown keys and unparsable values are ignored.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "renderer" | "strategy" => match RenderStrategy::from_str(value) {
                    Some(strategy) => self.apply_strategy(strategy),
                    None => log::warn!("Unknown renderer '{}'", value),
                },
                "count" => {
                    if let Ok(count) = value.parse() {
                        self.initial_bodies = count;
                    }
                }
                "size" => {
                    if let Ok(size) = value.parse::<f32>() {
                        if size > 0.0 {
                            self.body_size = size;
                        }
                    }
                }
                "stats" => self.show_stats = !matches!(value, "0" | "off" | "false"),
                _ => {}
            }
        }
    }

    /// Simulation tuning derived from these settings
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            body_size: Vec2::splat(self.body_size),
            speed: self.speed,
            max_dt: self.max_frame_dt,
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_bench_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

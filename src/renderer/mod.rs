//! Rendering strategies
//!
//! Every strategy reads the same `Simulation` once per frame; none of them
//! feed anything back into it.

pub mod pipeline;
pub mod shapes;
pub mod style;
pub mod vertex;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use pipeline::GpuRenderer;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(target_arch = "wasm32")]
pub use dom::{DomRenderer, Positioning};

use std::fmt;

use crate::sim::Simulation;

/// A way of putting the simulation on screen
pub trait Renderer {
    /// Draw the current body positions
    fn render(&mut self, sim: &Simulation) -> Result<(), RenderError>;

    /// Drawing surface changed size (renderer pixels)
    fn resize(&mut self, width: u32, height: u32);

    /// Current drawing surface size (renderer pixels)
    fn size(&self) -> (u32, u32);

    /// Short name for logs and the HUD
    fn name(&self) -> &'static str;
}

/// Errors raised while setting up or drawing a frame
#[derive(Debug)]
pub enum RenderError {
    /// Failed to create a surface for rendering
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device
    DeviceCreation(wgpu::RequestDeviceError),
    /// Surface texture could not be acquired this frame
    Surface(wgpu::SurfaceError),
    /// A browser API call failed
    Js(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            RenderError::NoAdapter(e) => write!(f, "No compatible GPU adapter found: {}", e),
            RenderError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            RenderError::Surface(e) => write!(f, "Surface error: {}", e),
            RenderError::Js(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::SurfaceCreation(e) => Some(e),
            RenderError::NoAdapter(e) => Some(e),
            RenderError::DeviceCreation(e) => Some(e),
            RenderError::Surface(e) => Some(e),
            RenderError::Js(_) => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for RenderError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        RenderError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::DeviceCreation(e)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RenderError::Surface(e)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for RenderError {
    fn from(e: wasm_bindgen::JsValue) -> Self {
        RenderError::Js(format!("{:?}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = RenderError::Js("getContext returned null".to_string());
        assert_eq!(err.to_string(), "Browser error: getContext returned null");

        let err = RenderError::from(wgpu::SurfaceError::Lost);
        assert!(err.to_string().starts_with("Surface error"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

//! Canvas 2D strategy
//!
//! All bodies go into one path and are filled once per frame.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::vertex::colors;
use super::{RenderError, Renderer};
use crate::sim::Simulation;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, RenderError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| RenderError::Js("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::Js("2d context has unexpected type".to_string()))?;
        Ok(Self { canvas, ctx })
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, sim: &Simulation) -> Result<(), RenderError> {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        ctx.begin_path();
        for body in &sim.bodies {
            ctx.rect(
                body.pos.x as f64,
                body.pos.y as f64,
                body.size.x as f64,
                body.size.y as f64,
            );
        }
        ctx.set_fill_style_str(colors::BODY_CSS);
        ctx.fill();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn name(&self) -> &'static str {
        "canvas"
    }
}

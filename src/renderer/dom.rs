//! DOM strategies: one `div` per body
//!
//! Elements are created lazily as bodies are spawned. Bodies are never
//! removed, so element `i` always mirrors body `i`.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::style::{absolute_style, px, transform_style};
use super::vertex::colors;
use super::{RenderError, Renderer};
use crate::sim::Simulation;

/// How element positions are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    /// `left` / `top`, forces layout every frame
    Absolute,
    /// `transform: translate3d(...)`, compositor only
    Transform,
}

pub struct DomRenderer {
    document: Document,
    container: HtmlElement,
    elements: Vec<HtmlElement>,
    positioning: Positioning,
}

impl DomRenderer {
    pub fn new(document: Document, container: HtmlElement, positioning: Positioning) -> Self {
        Self {
            document,
            container,
            elements: Vec::new(),
            positioning,
        }
    }

    /// Create elements for bodies spawned since the last frame
    fn sync_elements(&mut self, sim: &Simulation) -> Result<(), RenderError> {
        for body in &sim.bodies[self.elements.len().min(sim.bodies.len())..] {
            let el: HtmlElement = self
                .document
                .create_element("div")?
                .dyn_into()
                .map_err(|_| RenderError::Js("div is not an HtmlElement".to_string()))?;
            el.set_class_name("body");

            let style = el.style();
            style.set_property("position", "absolute")?;
            style.set_property("left", "0px")?;
            style.set_property("top", "0px")?;
            style.set_property("width", &px(body.size.x))?;
            style.set_property("height", &px(body.size.y))?;
            style.set_property("background", colors::BODY_CSS)?;

            self.container.append_child(&el)?;
            self.elements.push(el);
        }
        Ok(())
    }
}

impl Renderer for DomRenderer {
    fn render(&mut self, sim: &Simulation) -> Result<(), RenderError> {
        self.sync_elements(sim)?;

        for (el, body) in self.elements.iter().zip(&sim.bodies) {
            let style = el.style();
            match self.positioning {
                Positioning::Absolute => {
                    let (left, top) = absolute_style(body.pos);
                    style.set_property("left", &left)?;
                    style.set_property("top", &top)?;
                }
                Positioning::Transform => {
                    let transform = transform_style(body.pos);
                    style.set_property("-webkit-transform", &transform)?;
                    style.set_property("transform", &transform)?;
                }
            }
        }
        Ok(())
    }

    fn resize(&mut self, _width: u32, _height: u32) {
        // Elements are positioned in CSS pixels; nothing to reconfigure
    }

    fn size(&self) -> (u32, u32) {
        (
            self.container.client_width().max(0) as u32,
            self.container.client_height().max(0) as u32,
        )
    }

    fn name(&self) -> &'static str {
        match self.positioning {
            Positioning::Absolute => "dom-absolute",
            Positioning::Transform => "dom-transform",
        }
    }
}

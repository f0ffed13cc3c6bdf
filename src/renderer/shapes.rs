//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Body;

/// Vertices per rectangle (two triangles)
pub const QUAD_VERTICES: usize = 6;

/// Two triangles covering an axis-aligned rectangle, in pixel space
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; QUAD_VERTICES] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Quads for every body, in insertion order
pub fn bodies(bodies: &[Body], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(bodies.len() * QUAD_VERTICES);
    for body in bodies {
        vertices.extend_from_slice(&rect(body.pos, body.size, color));
    }
    vertices
}

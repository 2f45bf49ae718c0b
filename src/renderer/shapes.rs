//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in world coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::perp;
use crate::sim::FrameSnapshot;

/// Stroke width of the hexagon outline (pixels)
pub const OUTLINE_WIDTH: f32 = 3.0;
/// Triangle fan segments for the ball
pub const BALL_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let p1 = center + Vec2::new(theta1.cos(), theta1.sin()) * radius;
        let p2 = center + Vec2::new(theta2.cos(), theta2.sin()) * radius;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a thick line from `a` to `b`
///
/// The quad is lengthened by half the width at both ends so that consecutive
/// lines of a closed outline overlap at the corners.
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let Some(dir) = (b - a).try_normalize() else {
        return Vec::new();
    };
    let half = width / 2.0;
    let side = perp(dir) * half;
    let a = a - dir * half;
    let b = b + dir * half;

    let (a1, a2, b1, b2) = (a + side, a - side, b + side, b - side);
    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Generate vertices for the outline of a closed polygon
pub fn polygon_outline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(n * 6);
    for i in 0..n {
        vertices.extend(line(points[i], points[(i + 1) % n], width, color));
    }
    vertices
}

/// Everything drawn for one frame: the hexagon outline, then the ball on top
pub fn scene(frame: &FrameSnapshot) -> Vec<Vertex> {
    let mut vertices = polygon_outline(&frame.vertices, OUTLINE_WIDTH, colors::HEXAGON);
    vertices.extend(circle(frame.ball_pos, frame.ball_radius, colors::BALL, BALL_SEGMENTS));
    vertices
}

//! Rotating hexagon geometry
//!
//! The hexagon is a rigid body spinning about its center at a constant
//! angular velocity. Its vertices are derived from (center, radius, angle)
//! every frame and never stored.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_3, TAU};

use super::segment::Segment;
use crate::{perp, polar_to_cartesian};

/// Number of sides (and vertices) of the arena
pub const HEX_SIDES: usize = 6;

/// Vertices of a regular hexagon with circumradius `radius`
///
/// Vertex `i` sits at angle `angle_offset + i * π/3`, so the sequence runs in
/// increasing angle starting at `angle_offset`.
pub fn hexagon_vertices(center: Vec2, radius: f32, angle_offset: f32) -> [Vec2; HEX_SIDES] {
    std::array::from_fn(|i| center + polar_to_cartesian(radius, angle_offset + i as f32 * FRAC_PI_3))
}

/// One edge of a rotating body, carrying what the collision response needs
/// to know about how the edge moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub segment: Segment,
    /// Center of rotation
    pub pivot: Vec2,
    /// Radians per frame
    pub angular_velocity: f32,
}

impl Wall {
    /// Linear velocity of the wall at `point` due to rigid rotation about the pivot
    #[inline]
    pub fn surface_velocity(&self, point: Vec2) -> Vec2 {
        perp(point - self.pivot) * self.angular_velocity
    }
}

/// The spinning arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hexagon {
    pub center: Vec2,
    /// Circumradius
    pub radius: f32,
    /// Current rotation (radians, kept in [0, 2π))
    pub angle: f32,
    /// Radians per frame
    pub angular_velocity: f32,
}

impl Hexagon {
    pub fn new(center: Vec2, radius: f32, angle: f32, angular_velocity: f32) -> Self {
        Self {
            center,
            radius,
            angle: angle.rem_euclid(TAU),
            angular_velocity,
        }
    }

    /// Advance the rotation by `dt` frames
    pub fn advance(&mut self, dt: f32) {
        self.angle = (self.angle + self.angular_velocity * dt).rem_euclid(TAU);
    }

    pub fn vertices(&self) -> [Vec2; HEX_SIDES] {
        hexagon_vertices(self.center, self.radius, self.angle)
    }

    /// Edges in resolution order: 0→1, 1→2, ..., 5→0
    pub fn edges(&self) -> [Segment; HEX_SIDES] {
        let v = self.vertices();
        std::array::from_fn(|i| Segment::new(v[i], v[(i + 1) % HEX_SIDES]))
    }

    /// Edge `i` (from vertex `i` to vertex `i + 1`, wrapping) with this
    /// hexagon's rotation
    pub fn wall(&self, i: usize) -> Wall {
        let v = self.vertices();
        Wall {
            segment: Segment::new(v[i % HEX_SIDES], v[(i + 1) % HEX_SIDES]),
            pivot: self.center,
            angular_velocity: self.angular_velocity,
        }
    }

    /// Edges paired with this hexagon's rotation, in resolution order
    pub fn walls(&self) -> [Wall; HEX_SIDES] {
        std::array::from_fn(|i| self.wall(i))
    }

    /// Distance from the center to the middle of each edge
    #[inline]
    pub fn apothem(&self) -> f32 {
        self.radius * (FRAC_PI_3 / 2.0).cos()
    }
}

//! Line segments for the hexagon walls

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::perp;

/// A wall segment from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Direction vector from `a` to `b` (not normalized)
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.direction().length_squared()
    }

    /// Parameter `t` in [0, 1] of the point on the segment closest to `p`
    ///
    /// A zero-length segment has only one point, so `t` is 0.
    pub fn closest_t(&self, p: Vec2) -> f32 {
        let ab = self.direction();
        let len_sq = ab.length_squared();
        if len_sq == 0.0 {
            return 0.0;
        }
        ((p - self.a).dot(ab) / len_sq).clamp(0.0, 1.0)
    }

    /// Closest point on the segment (not its infinite extension) to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        self.a + self.direction() * self.closest_t(p)
    }

    /// Distance from `p` to the segment
    #[inline]
    pub fn distance_to(&self, p: Vec2) -> f32 {
        (p - self.closest_point(p)).length()
    }

    /// Unit normal obtained by rotating `b - a` by +90°
    ///
    /// `None` for a zero-length segment.
    pub fn unit_normal(&self) -> Option<Vec2> {
        perp(self.direction()).try_normalize()
    }
}

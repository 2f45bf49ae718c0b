//! Collision detection and response between the ball and moving walls
//!
//! Detection finds the closest point of a wall segment to the ball center.
//! Response pushes the ball out along the contact normal in one step, then
//! reflects its velocity in the rest frame of the wall, so a wall that is
//! sweeping into the ball hands some of its speed over.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hexagon::Wall;
use super::segment::Segment;
use super::state::Ball;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the segment to the ball center
    pub point: Vec2,
    /// Unit normal from the wall toward the ball center
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// How a wall treats the ball's velocity on contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallResponse {
    /// Fraction of normal relative speed kept (and reversed)
    pub restitution: f32,
    /// Fraction of tangential relative speed kept
    pub friction: f32,
}

/// Check overlap between a ball and a wall segment
///
/// A contact exists when the ball center is strictly closer than `radius` to
/// the segment. When the center lies exactly on the segment the normal falls
/// back to the segment's perpendicular. A zero-length segment under the ball
/// center has no usable normal and is reported as a miss.
pub fn ball_segment_collision(ball_pos: Vec2, ball_radius: f32, segment: &Segment) -> CollisionResult {
    let point = segment.closest_point(ball_pos);
    let offset = ball_pos - point;
    let dist = offset.length();

    if dist >= ball_radius {
        return CollisionResult::miss();
    }

    let normal = if dist != 0.0 {
        offset / dist
    } else if let Some(n) = segment.unit_normal() {
        n
    } else {
        log::warn!(
            "Degenerate wall segment at ({:.2}, {:.2}) under ball center, skipping contact",
            point.x,
            point.y
        );
        return CollisionResult::miss();
    };

    CollisionResult {
        hit: true,
        point,
        normal,
        penetration: ball_radius - dist,
    }
}

/// Velocity after a contact, computed in the wall's rest frame
///
/// `wall_vel` is the wall's velocity at the contact point.
pub fn respond_velocity(vel: Vec2, normal: Vec2, wall_vel: Vec2, response: WallResponse) -> Vec2 {
    let v_rel = vel - wall_vel;

    let vn = normal * v_rel.dot(normal);
    let vt = v_rel - vn;

    -response.restitution * vn + response.friction * vt + wall_vel
}

/// Resolve one wall against the ball, returning the corrected ball
///
/// The ball is returned unchanged when it does not overlap the wall.
pub fn resolve_wall_collision(ball: Ball, wall: &Wall, response: WallResponse) -> Ball {
    let contact = ball_segment_collision(ball.pos, ball.radius, &wall.segment);
    if !contact.hit {
        return ball;
    }

    log::trace!(
        "Wall contact at ({:.2}, {:.2}), penetration {:.4}",
        contact.point.x,
        contact.point.y,
        contact.penetration
    );

    let wall_vel = wall.surface_velocity(contact.point);
    Ball {
        pos: ball.pos + contact.normal * contact.penetration,
        vel: respond_velocity(ball.vel, contact.normal, wall_vel, response),
        ..ball
    }
}

//! Simulation state and parameters
//!
//! Everything the tick needs lives in [`SimState`], owned by whoever drives
//! the loop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::WallResponse;
use super::hexagon::Hexagon;
use crate::consts::*;
use crate::world_center;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Apply gravity, move, then damp (one integration step of `dt` frames)
    pub fn integrate(&mut self, gravity: Vec2, air_friction: f32, dt: f32) {
        self.vel += gravity * dt;
        self.pos += self.vel * dt;
        self.vel *= air_friction;
    }
}

/// Fixed physical constants of a run
///
/// `Default` is the reference configuration from [`crate::consts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Acceleration per frame
    pub gravity: Vec2,
    /// Per-tick velocity multiplier (< 1)
    pub air_friction: f32,
    /// Velocity response of the hexagon walls
    pub wall: WallResponse,
    pub ball_radius: f32,
    pub ball_start_pos: Vec2,
    pub ball_start_vel: Vec2,
    pub hex_center: Vec2,
    pub hex_radius: f32,
    pub hex_start_angle: f32,
    /// Radians per frame
    pub hex_angular_velocity: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: Vec2::from(GRAVITY),
            air_friction: AIR_FRICTION,
            wall: WallResponse {
                restitution: RESTITUTION,
                friction: WALL_FRICTION,
            },
            ball_radius: BALL_RADIUS,
            ball_start_pos: world_center(),
            ball_start_vel: Vec2::from(BALL_START_VELOCITY),
            hex_center: world_center(),
            hex_radius: HEX_RADIUS,
            hex_start_angle: HEX_START_ANGLE,
            hex_angular_velocity: HEX_ANGULAR_VELOCITY,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub params: SimParams,
    pub ball: Ball,
    pub hexagon: Hexagon,
    /// Completed ticks
    pub time_ticks: u64,
}

impl SimState {
    pub fn new(params: SimParams) -> Self {
        debug_assert!(params.ball_radius > 0.0, "ball radius must be positive");
        debug_assert!(
            params.hex_radius > params.ball_radius,
            "hexagon must be larger than the ball"
        );

        let ball = Ball::new(params.ball_start_pos, params.ball_start_vel, params.ball_radius);
        let hexagon = Hexagon::new(
            params.hex_center,
            params.hex_radius,
            params.hex_start_angle,
            params.hex_angular_velocity,
        );
        Self {
            params,
            ball,
            hexagon,
            time_ticks: 0,
        }
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(SimParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_setup() {
        let state = SimState::default();
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, -2.0));
        assert_eq!(state.ball.radius, 10.0);
        assert_eq!(state.hexagon.center, state.ball.pos);
        assert_eq!(state.hexagon.radius, 200.0);
        assert_eq!(state.hexagon.angle, 0.0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_integrate_order() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0);
        ball.integrate(Vec2::new(0.0, 0.5), 0.5, 2.0);
        // vel = (1, 1), pos = (2, 2), then damped
        assert_eq!(ball.pos, Vec2::new(2.0, 2.0));
        assert_eq!(ball.vel, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_params_serialize() {
        let params = SimParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: SimParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}

//! Hex Bounce - a ball bouncing inside a spinning hexagon
//!
//! Core modules:
//! - `sim`: Physics core (hexagon geometry, wall collisions, tick integration)
//! - `driver`: Frame loop tying the simulation to its collaborators
//! - `platform`: Frame pacing, stop requests and frame sinks
//! - `renderer`: WebGPU rendering of the current frame

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use driver::{run, step};
pub use sim::{FrameSnapshot, SimParams, SimState, TickInput, TickOutcome, tick};

use glam::Vec2;

/// Simulation configuration constants
///
/// Units are pixels and "reference frames": one reference frame is
/// [`REFERENCE_FRAME_MS`] of wall time, so velocities are pixels per frame.
pub mod consts {
    /// World size (screen coordinates, +y points down)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Duration of one reference frame in milliseconds (dt = 1.0)
    pub const REFERENCE_FRAME_MS: f32 = 16.67;
    /// Target tick rate for the frame pacer
    pub const TARGET_FPS: u32 = 60;
    /// Largest dt handed to the simulation after a stall (tab switch, debugger)
    pub const MAX_FRAME_DT: f32 = 4.0;
    /// Largest dt a single physics step may take; longer frames are split
    pub const MAX_STEP_DT: f32 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_VELOCITY: (f32, f32) = (5.0, -2.0);
    /// Gravitational acceleration per frame
    pub const GRAVITY: (f32, f32) = (0.0, 0.5);
    /// Velocity damping applied once per tick
    pub const AIR_FRICTION: f32 = 0.99;

    /// Wall response
    pub const RESTITUTION: f32 = 0.9;
    pub const WALL_FRICTION: f32 = 0.9;

    /// Hexagon defaults
    pub const HEX_RADIUS: f32 = 200.0;
    pub const HEX_START_ANGLE: f32 = 0.0;
    /// Radians per frame
    pub const HEX_ANGULAR_VELOCITY: f32 = 0.01;
}

/// Center of the world rectangle
#[inline]
pub fn world_center() -> Vec2 {
    Vec2::new(consts::WORLD_WIDTH / 2.0, consts::WORLD_HEIGHT / 2.0)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Counter-clockwise perpendicular: (x, y) -> (-y, x)
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

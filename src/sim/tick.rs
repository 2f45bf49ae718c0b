//! Variable timestep simulation tick
//!
//! Integrates the ball, spins the hexagon and resolves the six walls in order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve_wall_collision;
use super::hexagon::HEX_SIDES;
use super::state::SimState;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Quit requested (window close, Escape, tick budget exhausted)
    pub stop_requested: bool,
}

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub vertices: [Vec2; HEX_SIDES],
    pub ball_pos: Vec2,
    pub ball_radius: f32,
}

impl FrameSnapshot {
    pub fn capture(state: &SimState) -> Self {
        Self {
            tick: state.time_ticks,
            vertices: state.hexagon.vertices(),
            ball_pos: state.ball.pos,
            ball_radius: state.ball.radius,
        }
    }
}

/// Result of a tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The tick ran; draw this
    Frame(FrameSnapshot),
    /// Stop was requested; the state was left untouched
    Stopped,
}

/// Advance the simulation by `dt` reference frames
///
/// Walls are resolved one after another, each seeing the ball as left by the
/// previous one. When the ball touches two walls at once (a corner), the
/// second correction can undo part of the first; that is accepted.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) -> TickOutcome {
    if input.stop_requested {
        return TickOutcome::Stopped;
    }

    let params = &state.params;
    state.ball.integrate(params.gravity, params.air_friction, dt);
    state.hexagon.advance(dt);

    let response = params.wall;
    state.ball = state
        .hexagon
        .walls()
        .iter()
        .fold(state.ball, |ball, wall| resolve_wall_collision(ball, wall, response));

    state.time_ticks += 1;
    TickOutcome::Frame(FrameSnapshot::capture(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SimParams;

    const TOL: f32 = 1e-3;

    fn run_ticks(state: &mut SimState, n: usize) {
        let input = TickInput::default();
        for _ in 0..n {
            tick(state, &input, 1.0);
        }
    }

    #[test]
    fn test_stop_leaves_state_untouched() {
        let mut state = SimState::default();
        let before = state.ball;
        let input = TickInput { stop_requested: true };
        assert_eq!(tick(&mut state, &input, 1.0), TickOutcome::Stopped);
        assert_eq!(state.ball, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_tick_returns_snapshot_of_new_state() {
        let mut state = SimState::default();
        let outcome = tick(&mut state, &TickInput::default(), 1.0);
        let TickOutcome::Frame(frame) = outcome else {
            panic!("expected a frame");
        };
        assert_eq!(frame.tick, 1);
        assert_eq!(frame.ball_pos, state.ball.pos);
        assert_eq!(frame.vertices, state.hexagon.vertices());
        assert!((state.hexagon.angle - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_free_flight_step() {
        let mut state = SimState::default();
        run_ticks(&mut state, 1);
        // vel = (5, -2) + (0, 0.5) -> pos += vel -> vel *= 0.99
        assert!((state.ball.pos - Vec2::new(405.0, 298.5)).length() < TOL);
        assert!((state.ball.vel - Vec2::new(4.95, -1.485)).length() < TOL);
    }

    #[test]
    fn test_ball_at_rest_stays_put() {
        let params = SimParams {
            gravity: Vec2::ZERO,
            ball_start_vel: Vec2::ZERO,
            ..SimParams::default()
        };
        let mut state = SimState::new(params);
        let start = state.ball.pos;
        run_ticks(&mut state, 100);
        assert_eq!(state.ball.pos, start);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.time_ticks, 100);
    }

    #[test]
    fn test_drop_onto_stationary_floor() {
        // Released low enough that the impact speed stays below the ball radius
        // per tick; from the center the ball would tunnel through the floor.
        let params = SimParams {
            ball_start_pos: crate::world_center() + Vec2::new(0.0, 100.0),
            ball_start_vel: Vec2::ZERO,
            hex_angular_velocity: 0.0,
            ..SimParams::default()
        };
        let mut state = SimState::new(params);
        let radius = state.ball.radius;
        let floor_y = state.hexagon.center.y + state.hexagon.apothem();
        let input = TickInput::default();

        let mut bounced = false;
        let mut prev_vel_y = 0.0;
        for _ in 0..300 {
            tick(&mut state, &input, 1.0);
            let vel_y = state.ball.vel.y;

            // Never below the wall
            assert!(state.ball.pos.y <= floor_y - radius + TOL);

            if !bounced && vel_y < 0.0 {
                bounced = true;
                // This tick: gravity, damping, then reflect with restitution
                let impact = (prev_vel_y + 0.5) * 0.99;
                assert!(impact > 0.0);
                assert!((vel_y - (-0.9 * impact)).abs() < TOL);
                assert!((state.ball.pos.y - (floor_y - radius)).abs() < TOL);
            }
            prev_vel_y = vel_y;
        }
        assert!(bounced, "ball never reached the floor");
        // Dropped straight down: no sideways drift
        assert!((state.ball.pos.x - state.hexagon.center.x).abs() < TOL);
    }

    #[test]
    fn test_ball_stays_inside_rotating_hexagon() {
        let mut state = SimState::default();
        let input = TickInput::default();
        for _ in 0..2000 {
            tick(&mut state, &input, 1.0);
            for edge in state.hexagon.edges() {
                // Edge normals point toward the center
                let inward = edge.unit_normal().unwrap();
                let depth = (state.ball.pos - edge.a).dot(inward);
                assert!(
                    depth >= state.ball.radius - 1e-2,
                    "ball crossed a wall at tick {}",
                    state.time_ticks
                );
            }
        }
    }

    #[test]
    fn test_edges_resolved_in_order() {
        // Ball wedged into the corner at vertex 1, overlapping edges 0→1 and 1→2
        let params = SimParams {
            gravity: Vec2::ZERO,
            air_friction: 1.0,
            hex_angular_velocity: 0.0,
            ..SimParams::default()
        };
        let mut state = SimState::new(params);
        let corner = state.hexagon.vertices()[1];
        let inward = (state.hexagon.center - corner).normalize();
        state.ball.pos = corner + inward * 5.0;
        state.ball.vel = Vec2::ZERO;

        let walls = state.hexagon.walls();
        let response = state.params.wall;
        let expected = walls
            .iter()
            .fold(state.ball, |ball, wall| resolve_wall_collision(ball, wall, response));

        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.ball, expected);
        assert_ne!(state.ball.pos, corner + inward * 5.0);
    }

    #[test]
    fn test_determinism() {
        let mut a = SimState::default();
        let mut b = SimState::default();
        let input = TickInput::default();
        for dt in [1.0, 0.5, 2.0, 1.2, 0.9] {
            tick(&mut a, &input, dt);
            tick(&mut b, &input, dt);
        }
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.hexagon.angle, b.hexagon.angle);
    }
}

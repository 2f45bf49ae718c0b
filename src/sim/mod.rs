//! Simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - dt is an explicit input, never read from a clock
//! - Walls are resolved in a fixed order (edge 0→1 through 5→0)
//! - No rendering or platform dependencies

pub mod collision;
pub mod hexagon;
pub mod segment;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, WallResponse, ball_segment_collision, resolve_wall_collision};
pub use hexagon::{HEX_SIDES, Hexagon, Wall, hexagon_vertices};
pub use segment::Segment;
pub use state::{Ball, SimParams, SimState};
pub use tick::{FrameSnapshot, TickInput, TickOutcome, tick};

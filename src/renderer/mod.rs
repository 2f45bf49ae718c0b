//! WebGPU rendering module
//!
//! Consumes [`crate::sim::FrameSnapshot`]s: a closed outline through the
//! hexagon vertices and a filled circle for the ball.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, world_to_ndc};
pub use vertex::Vertex;

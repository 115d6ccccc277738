//! WebGPU rendering module
//!
//! Draws the level as flat-colored rectangles. Reads simulation state,
//! never writes it.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderInitError, RenderState, world_to_ndc};
pub use vertex::Vertex;

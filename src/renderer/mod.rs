//! CPU-side tessellation
//!
//! Turns a [`FrameView`](crate::sim::FrameView) into a flat triangle list a
//! GPU backend can upload as-is. No graphics API lives here.

pub mod shapes;
pub mod vertex;

pub use shapes::{frame_vertices, rect, to_clip_space};
pub use vertex::{Vertex, colors};

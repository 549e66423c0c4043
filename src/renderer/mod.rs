//! Rendering module
//!
//! The simulation keeps a retained canvas; rendering turns it into an
//! ordered list of draw commands and, on the web, paints them with the
//! HTML 2D canvas API.

pub mod draw;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

pub use draw::{DrawCommand, draw_list};

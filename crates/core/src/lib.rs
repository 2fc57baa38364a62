#![deny(unsafe_code)]
//! Setup and draw logic for a single per-vertex-colored triangle.
//!
//! Provides the `Gl` seam over WebGL2 / OpenGL, the embedded shader pair
//! and `ShaderLibrary`, the fixed triangle geometry, and `ColorTriangle`,
//! which runs shader setup, buffer setup and one draw in order.

pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod shader_source;
pub mod triangle;

pub use config::StartupConfig;
pub use error::SetupError;
pub use render::{Gl, GpuContext, SurfaceSize};
pub use shader_source::{ShaderLibrary, ShaderSource, ShaderStage};
pub use triangle::{render_once, ColorTriangle, Stage};

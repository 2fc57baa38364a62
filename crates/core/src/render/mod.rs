//! GPU-side setup: context, shaders, attribute container and buffers.
//!
//! Everything here is written against the [`Gl`] trait. The `render`
//! feature adds the `glow::Context` implementation used in the browser.
//!
//! # Module overview
//!
//! - [`api`] -- The `Gl` trait: the graphics calls the triangle makes.
//! - [`context`] -- Context wrapper recording the surface size.
//! - [`shader`] -- Shader compilation, linking, and error formatting.
//! - [`program`] -- Linked program with resolved attribute slots.
//! - [`vertex_array`] -- Attribute container (VAO).
//! - [`buffer`] -- Static vertex buffers bound to attribute slots.

pub mod api;
pub mod buffer;
pub mod context;
#[cfg(feature = "render")]
pub mod glow_api;
pub mod program;
pub mod shader;
pub mod vertex_array;

#[cfg(test)]
pub(crate) mod recording;

pub use api::Gl;
pub use buffer::VertexBuffer;
pub use context::{GpuContext, SurfaceSize};
pub use program::ShaderProgram;
pub use shader::{compile_shader, format_shader_error, link_program, ShaderError};
pub use vertex_array::VertexArray;

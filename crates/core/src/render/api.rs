//! The narrow slice of the GL / WebGL2 API the triangle needs.
//!
//! Setup and draw code is written against [`Gl`] rather than
//! `glow::HasContext` directly, so the call sequence can be recorded and
//! checked without a driver. With the `render` feature, `glow::Context`
//! implements it (see `glow_api`).

use std::fmt::Debug;

use crate::shader_source::ShaderStage;

/// Graphics operations used by shader, buffer and draw setup.
///
/// Handles are plain copyable ids owned by the GL context; dropping one
/// does not release the GPU object.
pub trait Gl {
    type Shader: Copy + Debug;
    type Program: Copy + Debug;
    type VertexArray: Copy + Debug;
    type Buffer: Copy + Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);

    /// Slot index of the named vertex attribute, or `None` if the linked
    /// program has no active attribute by that name.
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn enable_vertex_attrib_array(&self, index: u32);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` into the bound array buffer with static usage.
    fn upload_static_f32(&self, data: &[f32]);
    /// Points attribute `index` at the bound array buffer as `size` floats
    /// per vertex, `stride` bytes apart, starting `offset` bytes in.
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32);

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, rgba: [f32; 4]);
    fn clear_color_buffer(&self);
    /// Draws `count` vertices from `first` as a triangle list.
    fn draw_triangles(&self, first: i32, count: i32);
}

//! The linked triangle program and its resolved attribute slots.

use super::api::Gl;
use super::shader::{compile_shader, link_program};
use super::vertex_array::VertexArray;
use crate::error::SetupError;
use crate::shader_source::{ShaderSource, COLOR_ATTRIBUTE, POSITION_ATTRIBUTE};

/// A linked, active program together with the two shaders it was built
/// from and the slot indices of its position and color inputs.
pub struct ShaderProgram<G: Gl> {
    program: G::Program,
    vertex: G::Shader,
    fragment: G::Shader,
    position_location: u32,
    color_location: u32,
}

impl<G: Gl> ShaderProgram<G> {
    /// Compiles and links `vertex` and `fragment`, makes the program current,
    /// allocates and binds the attribute container, then resolves and
    /// enables the position and color slots.
    ///
    /// The program is only activated after both stages compiled and the
    /// link succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Shader`] on a compile or link failure,
    /// [`SetupError::Allocation`] if the attribute container cannot be
    /// created, or [`SetupError::AttributeNotFound`] if the program has no
    /// active attribute for either name.
    pub fn setup(
        gl: &G,
        vertex: &ShaderSource,
        fragment: &ShaderSource,
    ) -> Result<(Self, VertexArray<G>), SetupError> {
        let vs = compile_shader(gl, vertex)?;
        let fs = match compile_shader(gl, fragment) {
            Ok(fs) => fs,
            Err(e) => {
                gl.delete_shader(vs);
                return Err(e.into());
            }
        };

        let program = match link_program(gl, vs, fs) {
            Ok(program) => program,
            Err(e) => {
                gl.delete_shader(vs);
                gl.delete_shader(fs);
                return Err(e.into());
            }
        };

        // Attribute lookups below assume this program is current.
        gl.use_program(Some(program));

        let vertex_array = VertexArray::new(gl)?;
        vertex_array.bind(gl);

        let position_location = resolve(gl, program, POSITION_ATTRIBUTE)?;
        let color_location = resolve(gl, program, COLOR_ATTRIBUTE)?;
        gl.enable_vertex_attrib_array(position_location);
        gl.enable_vertex_attrib_array(color_location);

        log::debug!(
            "attributes resolved: {POSITION_ATTRIBUTE}={position_location}, \
             {COLOR_ATTRIBUTE}={color_location}"
        );

        Ok((
            Self {
                program,
                vertex: vs,
                fragment: fs,
                position_location,
                color_location,
            },
            vertex_array,
        ))
    }

    pub fn program(&self) -> G::Program {
        self.program
    }

    /// The vertex and fragment shader objects, in that order.
    pub fn shaders(&self) -> (G::Shader, G::Shader) {
        (self.vertex, self.fragment)
    }

    pub fn position_location(&self) -> u32 {
        self.position_location
    }

    pub fn color_location(&self) -> u32 {
        self.color_location
    }

    /// Looks up any attribute slot by name. `None` means the program has no
    /// active input with that name.
    pub fn attribute(&self, gl: &G, name: &str) -> Option<u32> {
        gl.attrib_location(self.program, name)
    }
}

fn resolve<G: Gl>(gl: &G, program: G::Program, name: &str) -> Result<u32, SetupError> {
    gl.attrib_location(program, name)
        .ok_or_else(|| SetupError::AttributeNotFound(name.to_string()))
}

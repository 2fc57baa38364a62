//! Attribute container (vertex array object).
//!
//! Records which buffer and layout feed each attribute slot. It must be
//! bound while buffers are attached to slots and again while drawing.

use super::api::Gl;
use crate::error::SetupError;

pub struct VertexArray<G: Gl> {
    handle: G::VertexArray,
}

impl<G: Gl> VertexArray<G> {
    /// Allocates a vertex array object.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Allocation`] if the driver refuses.
    pub fn new(gl: &G) -> Result<Self, SetupError> {
        let handle = gl
            .create_vertex_array()
            .map_err(|reason| SetupError::Allocation {
                resource: "vertex array",
                reason,
            })?;
        Ok(Self { handle })
    }

    pub fn bind(&self, gl: &G) {
        gl.bind_vertex_array(Some(self.handle));
    }

    /// Clears the vertex array binding.
    pub fn unbind(gl: &G) {
        gl.bind_vertex_array(None);
    }

    pub fn handle(&self) -> G::VertexArray {
        self.handle
    }
}

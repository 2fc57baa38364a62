//! Static vertex buffers bound to attribute slots.

use super::api::Gl;
use crate::error::SetupError;
use crate::geometry::VertexLayout;

/// A GPU buffer uploaded once and attached to one attribute slot.
///
/// The contents are never rewritten after [`VertexBuffer::upload_static`].
pub struct VertexBuffer<G: Gl> {
    handle: G::Buffer,
    layout: VertexLayout,
    location: u32,
}

impl<G: Gl> VertexBuffer<G> {
    /// Creates a buffer, uploads `data` with static usage, and points
    /// attribute slot `location` at it as `item_size` floats per vertex.
    ///
    /// The attribute container that should record the binding must already
    /// be bound.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidVertexData`] if `data` is empty or not a
    /// whole number of vertices, or [`SetupError::Allocation`] if the buffer
    /// cannot be created.
    pub fn upload_static(
        gl: &G,
        data: &[f32],
        item_size: usize,
        location: u32,
    ) -> Result<Self, SetupError> {
        let layout =
            VertexLayout::for_len(data.len(), item_size).ok_or(SetupError::InvalidVertexData {
                len: data.len(),
                item_size,
            })?;

        let handle = gl.create_buffer().map_err(|reason| SetupError::Allocation {
            resource: "vertex buffer",
            reason,
        })?;

        gl.bind_array_buffer(Some(handle));
        gl.upload_static_f32(data);
        gl.vertex_attrib_pointer_f32(
            location,
            layout.item_size as i32,
            layout.stride_bytes() as i32,
            0,
        );

        log::debug!(
            "uploaded {} vertices x {} floats to attribute {location}",
            layout.item_count,
            layout.item_size
        );

        Ok(Self {
            handle,
            layout,
            location,
        })
    }

    pub fn handle(&self) -> G::Buffer {
        self.handle
    }

    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    /// Attribute slot this buffer feeds.
    pub fn location(&self) -> u32 {
        self.location
    }
}

//! Graphics context wrapper holding the drawing surface's size.
//!
//! `GpuContext` owns the [`Gl`] implementation for the whole run and
//! remembers the surface dimensions observed when it was created; the
//! draw step sizes the viewport from them.

use super::api::Gl;

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport rectangle `(x, y, width, height)` covering the whole surface.
    ///
    /// Dimensions beyond `i32::MAX` saturate.
    pub fn viewport(&self) -> (i32, i32, i32, i32) {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        (0, 0, w, h)
    }
}

/// Wraps a [`Gl`] implementation together with the surface size recorded
/// at acquisition time.
///
/// Created once at startup. Nothing in the setup sequence changes the
/// recorded size afterwards.
pub struct GpuContext<G: Gl> {
    gl: G,
    size: SurfaceSize,
}

impl<G: Gl> GpuContext<G> {
    /// Takes ownership of an acquired context and records the surface size.
    pub fn new(gl: G, size: SurfaceSize) -> Self {
        if size.width == 0 || size.height == 0 {
            log::warn!(
                "drawing surface is {}x{}; nothing will be visible",
                size.width,
                size.height
            );
        }
        log::debug!("context ready ({}x{})", size.width, size.height);
        Self { gl, size }
    }

    /// Returns a reference to the underlying graphics API.
    pub fn gl(&self) -> &G {
        &self.gl
    }

    /// Surface size recorded when the context was created.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Consumes this wrapper and returns the underlying graphics API.
    pub fn into_gl(self) -> G {
        self.gl
    }
}

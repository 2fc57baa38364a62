//! Fixed triangle geometry and colors.
//!
//! These are domain constants: one triangle in clip space with a pure
//! red, green and blue corner, drawn over an opaque black background.

use glam::{Vec3, Vec4};

/// Number of vertices in the triangle.
pub const VERTEX_COUNT: usize = 3;

/// Floats per position (x, y, z).
pub const POSITION_COMPONENTS: usize = 3;

/// Floats per color (r, g, b, a).
pub const COLOR_COMPONENTS: usize = 4;

/// Apex at (0, 0.5), base corners at (-0.5, -0.5) and (0.5, -0.5), z = 0.
#[rustfmt::skip]
pub const TRIANGLE_POSITIONS: [f32; VERTEX_COUNT * POSITION_COMPONENTS] = [
     0.0,  0.5, 0.0,
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
];

/// One opaque RGBA color per vertex: red, green, blue.
#[rustfmt::skip]
pub const VERTEX_COLORS: [f32; VERTEX_COUNT * COLOR_COMPONENTS] = [
    1.0, 0.0, 0.0, 1.0,
    0.0, 1.0, 0.0, 1.0,
    0.0, 0.0, 1.0, 1.0,
];

/// Background the color buffer is cleared to before drawing.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Number of floats per vertex and number of vertices in a tightly packed
/// single-attribute buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub item_size: usize,
    pub item_count: usize,
}

impl VertexLayout {
    /// Derives the layout of `len` floats split into `item_size`-float vertices.
    ///
    /// Returns `None` if `item_size` is zero, `len` is zero, or `len` is not
    /// a whole number of vertices.
    pub fn for_len(len: usize, item_size: usize) -> Option<Self> {
        if item_size == 0 || len == 0 || len % item_size != 0 {
            return None;
        }
        Some(Self {
            item_size,
            item_count: len / item_size,
        })
    }

    /// Byte distance between consecutive vertices.
    pub fn stride_bytes(&self) -> usize {
        self.item_size * std::mem::size_of::<f32>()
    }
}

/// The triangle's corners as vectors.
pub fn triangle_vertices() -> [Vec3; VERTEX_COUNT] {
    let p = &TRIANGLE_POSITIONS;
    [
        Vec3::from_slice(&p[0..3]),
        Vec3::from_slice(&p[3..6]),
        Vec3::from_slice(&p[6..9]),
    ]
}

/// The per-vertex colors as vectors.
pub fn vertex_colors() -> [Vec4; VERTEX_COUNT] {
    let c = &VERTEX_COLORS;
    [
        Vec4::from_slice(&c[0..4]),
        Vec4::from_slice(&c[4..8]),
        Vec4::from_slice(&c[8..12]),
    ]
}

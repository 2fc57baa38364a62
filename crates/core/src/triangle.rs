//! The colored triangle: one pass of setup followed by a single draw.
//!
//! Stages run strictly in order and each is a precondition for the next:
//! context ready, shaders ready, buffers ready, drawn. Any failure ends
//! the run; nothing is retried.

use std::fmt;

use crate::config::StartupConfig;
use crate::error::SetupError;
use crate::geometry::{
    CLEAR_COLOR, COLOR_COMPONENTS, POSITION_COMPONENTS, TRIANGLE_POSITIONS, VERTEX_COLORS,
};
use crate::render::{Gl, GpuContext, ShaderProgram, VertexArray, VertexBuffer};
use crate::shader_source::{ShaderLibrary, ShaderStage};

/// Progress through the setup-then-draw sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    ContextReady,
    ShadersReady,
    BuffersReady,
    Drawn,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ContextReady => "context ready",
            Self::ShadersReady => "shaders ready",
            Self::BuffersReady => "buffers ready",
            Self::Drawn => "drawn",
        })
    }
}

/// Every GPU object the triangle needs, owned for the rest of the run.
pub struct ColorTriangle<G: Gl> {
    ctx: GpuContext<G>,
    program: ShaderProgram<G>,
    vertex_array: VertexArray<G>,
    positions: VertexBuffer<G>,
    colors: VertexBuffer<G>,
    stage: Stage,
}

impl<G: Gl> ColorTriangle<G> {
    /// Sets up shaders and buffers on an acquired context.
    ///
    /// Shader sources are looked up in `library` under the ids in `config`;
    /// a missing id or a source for the wrong stage fails before anything
    /// is compiled.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SetupError`] from shader or buffer setup.
    pub fn setup(
        ctx: GpuContext<G>,
        library: &ShaderLibrary,
        config: &StartupConfig,
    ) -> Result<Self, SetupError> {
        let vertex = library.require(&config.vertex_shader_id, ShaderStage::Vertex)?;
        let fragment = library.require(&config.fragment_shader_id, ShaderStage::Fragment)?;

        let gl = ctx.gl();
        let (program, vertex_array) = ShaderProgram::setup(gl, vertex, fragment)?;
        log::debug!("stage: {}", Stage::ShadersReady);

        let positions = VertexBuffer::upload_static(
            gl,
            &TRIANGLE_POSITIONS,
            POSITION_COMPONENTS,
            program.position_location(),
        )?;
        let colors = VertexBuffer::upload_static(
            gl,
            &VERTEX_COLORS,
            COLOR_COMPONENTS,
            program.color_location(),
        )?;
        log::debug!("stage: {}", Stage::BuffersReady);

        Ok(Self {
            ctx,
            program,
            vertex_array,
            positions,
            colors,
            stage: Stage::BuffersReady,
        })
    }

    /// Renders the frame: viewport from the recorded surface size, clear to
    /// [`CLEAR_COLOR`], one triangle-list draw, then unbinds the container.
    pub fn draw(&mut self) {
        let gl = self.ctx.gl();
        let (x, y, w, h) = self.ctx.size().viewport();

        gl.viewport(x, y, w, h);
        gl.clear_color(CLEAR_COLOR);
        gl.clear_color_buffer();

        self.vertex_array.bind(gl);
        gl.draw_triangles(0, self.positions.layout().item_count as i32);
        VertexArray::unbind(gl);

        self.stage = Stage::Drawn;
        log::debug!("stage: {}", self.stage);
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn context(&self) -> &GpuContext<G> {
        &self.ctx
    }

    pub fn vertex_array(&self) -> &VertexArray<G> {
        &self.vertex_array
    }

    pub fn program(&self) -> &ShaderProgram<G> {
        &self.program
    }

    pub fn positions(&self) -> &VertexBuffer<G> {
        &self.positions
    }

    pub fn colors(&self) -> &VertexBuffer<G> {
        &self.colors
    }
}

/// Runs the whole sequence once: setup, then a single draw.
///
/// The returned triangle keeps every GPU object alive; dropping it does not
/// delete them.
///
/// # Errors
///
/// Returns the first [`SetupError`] encountered; nothing is drawn then.
pub fn render_once<G: Gl>(
    ctx: GpuContext<G>,
    library: &ShaderLibrary,
    config: &StartupConfig,
) -> Result<ColorTriangle<G>, SetupError> {
    log::info!("drawing a triangle...");
    let mut triangle = ColorTriangle::setup(ctx, library, config)?;
    triangle.draw();
    Ok(triangle)
}

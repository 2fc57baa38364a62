//! Shader compilation and linking.
//!
//! Failed shader and program objects are deleted before the error is
//! returned, so a failure leaves nothing half-built behind.

use thiserror::Error;

use super::api::Gl;
use crate::shader_source::{ShaderSource, ShaderStage};

/// Errors that can occur during shader compilation or program linking.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// A shader stage failed to compile.
    #[error("shader compile error ({stage} shader '{id}'):\n{log}")]
    CompileError {
        stage: ShaderStage,
        id: String,
        /// Line-numbered source followed by the driver's info log.
        log: String,
    },
    /// The program failed to link.
    #[error("failed to link shader program:\n{0}")]
    LinkError(String),
    /// The driver could not create a shader or program object.
    #[error("failed to create {0} object: {1}")]
    CreateFailed(&'static str, String),
}

/// Numbers each line of `source` and appends the driver `log`, so the line
/// references in the log can be matched to the GLSL.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let line_count = source.lines().count();
    let width = line_count.max(1).to_string().len();

    let mut out = String::new();
    for (n, line) in source.lines().enumerate() {
        if n > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{:>width$}: {line}", n + 1));
    }

    if !log.is_empty() {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(log);
    }
    out
}

/// Compiles one shader source for its declared stage.
///
/// # Errors
///
/// Returns [`ShaderError::CompileError`] carrying the numbered source and
/// the compiler's diagnostic if compilation fails.
pub fn compile_shader<G: Gl>(gl: &G, source: &ShaderSource) -> Result<G::Shader, ShaderError> {
    let shader = gl
        .create_shader(source.stage)
        .map_err(|e| ShaderError::CreateFailed("shader", e))?;

    gl.shader_source(shader, &source.text);
    gl.compile_shader(shader);

    if gl.shader_compile_status(shader) {
        log::debug!("compiled {} shader '{}'", source.stage, source.id);
        return Ok(shader);
    }

    let info_log = gl.shader_info_log(shader);
    gl.delete_shader(shader);
    log::error!("{} shader '{}' failed to compile", source.stage, source.id);
    Err(ShaderError::CompileError {
        stage: source.stage,
        id: source.id.clone(),
        log: format_shader_error(&source.text, &info_log),
    })
}

/// Links a compiled vertex and fragment shader into a program.
///
/// Both shaders stay attached to the returned program.
///
/// # Errors
///
/// Returns [`ShaderError::LinkError`] with the linker's info log if linking
/// fails; the program object is deleted in that case.
pub fn link_program<G: Gl>(
    gl: &G,
    vertex: G::Shader,
    fragment: G::Shader,
) -> Result<G::Program, ShaderError> {
    let program = gl
        .create_program()
        .map_err(|e| ShaderError::CreateFailed("program", e))?;

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    if gl.program_link_status(program) {
        log::debug!("linked shader program");
        return Ok(program);
    }

    let info_log = gl.program_info_log(program);
    gl.detach_shader(program, vertex);
    gl.detach_shader(program, fragment);
    gl.delete_program(program);
    log::error!("shader program failed to link");
    Err(ShaderError::LinkError(info_log))
}

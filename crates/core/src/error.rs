//! Error types for the hello-color setup sequence.
//!
//! Every variant is terminal for the run: there is no retry and no
//! partial-success mode. The browser host reports the message to the user
//! and stops.

use thiserror::Error;

use crate::render::shader::ShaderError;
use crate::shader_source::ShaderStage;

/// Errors produced while acquiring the context and setting up the triangle.
#[derive(Debug, Error)]
pub enum SetupError {
    /// No WebGL2 / GL context could be obtained from the drawing surface.
    #[error("failed to create WebGL context: {0}")]
    ContextUnavailable(String),

    /// No shader source is registered under the requested identifier.
    #[error("shader source not found: {0}")]
    MissingShaderSource(String),

    /// A shader script element carried a type that names no known stage.
    #[error("shader '{id}' has unsupported script type '{script_type}'")]
    UnsupportedShaderType { id: String, script_type: String },

    /// A source was found but declares a different stage than the slot it fills.
    #[error("shader '{id}' is a {found} shader, expected {expected}")]
    StageMismatch {
        id: String,
        expected: ShaderStage,
        found: ShaderStage,
    },

    /// Compilation or linking failed.
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// The linked program has no active attribute with this name.
    #[error("vertex attribute not found in linked program: {0}")]
    AttributeNotFound(String),

    /// The driver refused to allocate a GPU object.
    #[error("failed to allocate {resource}: {reason}")]
    Allocation {
        resource: &'static str,
        reason: String,
    },

    /// Vertex data is empty or not a whole number of vertices.
    #[error("invalid vertex data: {len} floats is not a multiple of {item_size}")]
    InvalidVertexData { len: usize, item_size: usize },
}

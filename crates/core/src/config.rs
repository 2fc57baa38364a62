//! Startup identifiers and log level.
//!
//! There is no runtime configuration surface; the defaults match the
//! hosting page in `crates/wasm/www/index.html`.

use crate::shader_source::{FRAGMENT_SHADER_ID, VERTEX_SHADER_ID};

/// Element ids and log level used by the startup entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Id of the canvas to draw on.
    pub canvas_id: String,
    /// Id of the vertex shader source.
    pub vertex_shader_id: String,
    /// Id of the fragment shader source.
    pub fragment_shader_id: String,
    pub log_level: log::LevelFilter,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            canvas_id: "myGLCanvas".to_string(),
            vertex_shader_id: VERTEX_SHADER_ID.to_string(),
            fragment_shader_id: FRAGMENT_SHADER_ID.to_string(),
            log_level: log::LevelFilter::Info,
        }
    }
}

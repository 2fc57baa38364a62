//! Shader source texts, keyed by identifier and tagged with their stage.
//!
//! The page that hosts the triangle can supply sources as `<script>`
//! elements; the built-in pair returned by [`ShaderLibrary::embedded`] is
//! used for any identifier the page does not provide.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::SetupError;

/// Identifier of the built-in vertex shader.
pub const VERTEX_SHADER_ID: &str = "shader-vs";

/// Identifier of the built-in fragment shader.
pub const FRAGMENT_SHADER_ID: &str = "shader-fs";

/// Name of the per-vertex position input (`vec3`).
pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";

/// Name of the per-vertex RGBA color input (`vec4`).
pub const COLOR_ATTRIBUTE: &str = "aVertexColor";

/// GLSL ES 3.00 vertex shader: passes the position through unchanged and
/// forwards the vertex color for interpolation.
pub const VERTEX_SHADER: &str = r#"#version 300 es
in vec3 aVertexPosition;
in vec4 aVertexColor;
out vec4 vColor;
void main() {
    gl_Position = vec4(aVertexPosition, 1.0);
    vColor = aVertexColor;
}
"#;

/// GLSL ES 3.00 fragment shader: writes the interpolated vertex color.
pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
in vec4 vColor;
out vec4 fragmentColor;
void main() {
    fragmentColor = vColor;
}
"#;

/// The pipeline stage a shader source is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Maps a `<script type="...">` value to a stage.
    ///
    /// Returns `None` for anything other than `x-shader/x-vertex` or
    /// `x-shader/x-fragment`.
    pub fn from_script_type(script_type: &str) -> Option<Self> {
        match script_type.trim() {
            "x-shader/x-vertex" => Some(Self::Vertex),
            "x-shader/x-fragment" => Some(Self::Fragment),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One shader text together with its identifier and stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub id: String,
    pub stage: ShaderStage,
    pub text: String,
}

impl ShaderSource {
    pub fn new(id: impl Into<String>, stage: ShaderStage, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stage,
            text: text.into(),
        }
    }

    /// Builds a source from a script element's `type` attribute and text.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnsupportedShaderType`] if the type names no stage.
    pub fn from_script(id: &str, script_type: &str, text: &str) -> Result<Self, SetupError> {
        let stage = ShaderStage::from_script_type(script_type).ok_or_else(|| {
            SetupError::UnsupportedShaderType {
                id: id.to_string(),
                script_type: script_type.to_string(),
            }
        })?;
        Ok(Self::new(id, stage, text))
    }
}

/// Shader sources addressable by identifier.
#[derive(Debug, Clone, Default)]
pub struct ShaderLibrary {
    sources: BTreeMap<String, ShaderSource>,
}

impl ShaderLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library holding the built-in vertex/fragment pair under
    /// [`VERTEX_SHADER_ID`] and [`FRAGMENT_SHADER_ID`].
    pub fn embedded() -> Self {
        let mut library = Self::new();
        library.insert(ShaderSource::new(
            VERTEX_SHADER_ID,
            ShaderStage::Vertex,
            VERTEX_SHADER,
        ));
        library.insert(ShaderSource::new(
            FRAGMENT_SHADER_ID,
            ShaderStage::Fragment,
            FRAGMENT_SHADER,
        ));
        library
    }

    /// Adds a source, returning the one it replaced under the same id.
    pub fn insert(&mut self, source: ShaderSource) -> Option<ShaderSource> {
        self.sources.insert(source.id.clone(), source)
    }

    /// Looks up a source by identifier. A missing id is not an error here;
    /// callers that need the source use [`ShaderLibrary::require`].
    pub fn get(&self, id: &str) -> Option<&ShaderSource> {
        self.sources.get(id)
    }

    /// Looks up a source and checks it is written for `stage`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingShaderSource`] if nothing is registered
    /// under `id`, or [`SetupError::StageMismatch`] if the source is for the
    /// other stage.
    pub fn require(&self, id: &str, stage: ShaderStage) -> Result<&ShaderSource, SetupError> {
        let source = self
            .get(id)
            .ok_or_else(|| SetupError::MissingShaderSource(id.to_string()))?;
        if source.stage != stage {
            return Err(SetupError::StageMismatch {
                id: id.to_string(),
                expected: stage,
                found: source.stage,
            });
        }
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_types_map_to_stages() {
        assert_eq!(
            ShaderStage::from_script_type("x-shader/x-vertex"),
            Some(ShaderStage::Vertex)
        );
        assert_eq!(
            ShaderStage::from_script_type("x-shader/x-fragment"),
            Some(ShaderStage::Fragment)
        );
        assert_eq!(ShaderStage::from_script_type("text/javascript"), None);
        assert_eq!(ShaderStage::from_script_type(""), None);
    }

    #[test]
    fn from_script_rejects_unknown_type() {
        let err = ShaderSource::from_script("shader-vs", "text/plain", "void main() {}")
            .expect_err("text/plain is not a shader type");
        assert!(
            matches!(err, SetupError::UnsupportedShaderType { ref id, .. } if id == "shader-vs"),
            "got: {err:?}"
        );
    }

    #[test]
    fn embedded_library_holds_both_stages() {
        let library = ShaderLibrary::embedded();
        assert_eq!(library.len(), 2);
        assert_eq!(
            library.get(VERTEX_SHADER_ID).map(|s| s.stage),
            Some(ShaderStage::Vertex)
        );
        assert_eq!(
            library.get(FRAGMENT_SHADER_ID).map(|s| s.stage),
            Some(ShaderStage::Fragment)
        );
    }

    #[test]
    fn embedded_vertex_shader_declares_both_attributes() {
        assert!(
            VERTEX_SHADER.contains(&format!("in vec3 {POSITION_ATTRIBUTE}")),
            "expected position input in:\n{VERTEX_SHADER}"
        );
        assert!(
            VERTEX_SHADER.contains(&format!("in vec4 {COLOR_ATTRIBUTE}")),
            "expected color input in:\n{VERTEX_SHADER}"
        );
    }

    #[test]
    fn embedded_shaders_share_the_color_varying() {
        assert!(VERTEX_SHADER.contains("out vec4 vColor"));
        assert!(FRAGMENT_SHADER.contains("in vec4 vColor"));
    }

    #[test]
    fn embedded_shaders_target_glsl_es_300() {
        assert!(VERTEX_SHADER.starts_with("#version 300 es"));
        assert!(FRAGMENT_SHADER.starts_with("#version 300 es"));
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        assert!(ShaderLibrary::embedded().get("shader-gs").is_none());
    }

    #[test]
    fn require_reports_missing_id() {
        let err = ShaderLibrary::new()
            .require(VERTEX_SHADER_ID, ShaderStage::Vertex)
            .expect_err("empty library");
        assert!(matches!(err, SetupError::MissingShaderSource(ref id) if id == VERTEX_SHADER_ID));
    }

    #[test]
    fn require_reports_stage_mismatch() {
        let err = ShaderLibrary::embedded()
            .require(VERTEX_SHADER_ID, ShaderStage::Fragment)
            .expect_err("vertex source in fragment slot");
        assert!(
            matches!(
                err,
                SetupError::StageMismatch {
                    expected: ShaderStage::Fragment,
                    found: ShaderStage::Vertex,
                    ..
                }
            ),
            "got: {err:?}"
        );
    }

    #[test]
    fn insert_replaces_existing_source() {
        let mut library = ShaderLibrary::embedded();
        let replaced = library.insert(ShaderSource::new(
            VERTEX_SHADER_ID,
            ShaderStage::Vertex,
            "custom",
        ));
        assert_eq!(replaced.map(|s| s.text), Some(VERTEX_SHADER.to_string()));
        assert_eq!(
            library.get(VERTEX_SHADER_ID).map(|s| s.text.as_str()),
            Some("custom")
        );
    }
}

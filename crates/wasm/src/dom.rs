//! DOM access: canvas lookup, WebGL2 context creation, shader scripts.

use hello_color_core::{
    render_once, GpuContext, SetupError, ShaderLibrary, ShaderSource, StartupConfig, SurfaceSize,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlScriptElement, WebGl2RenderingContext};

use crate::logging::init_logging;

/// Draws the triangle once on the page's canvas.
///
/// # Errors
///
/// On any setup failure the message is logged, shown with
/// `window.alert`, and returned as a string `JsValue`. Nothing is drawn.
#[wasm_bindgen]
pub fn startup() -> Result<(), JsValue> {
    let config = StartupConfig::default();
    init_logging(config.log_level);
    run(&config).map_err(|err| {
        report(&err);
        JsValue::from_str(&err.to_string())
    })
}

fn run(config: &StartupConfig) -> Result<(), SetupError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SetupError::ContextUnavailable("no document available".into()))?;

    let canvas = find_canvas(&document, &config.canvas_id)?;
    let gl = create_gl_context(&canvas)?;
    let ctx = GpuContext::new(gl, SurfaceSize::new(canvas.width(), canvas.height()));

    let library = load_shader_library(&document, config)?;
    render_once(ctx, &library, config)?;
    Ok(())
}

fn find_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, SetupError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| SetupError::ContextUnavailable(format!("no canvas element with id '{id}'")))
}

fn create_gl_context(canvas: &HtmlCanvasElement) -> Result<glow::Context, SetupError> {
    let context = canvas
        .get_context("webgl2")
        .map_err(|e| SetupError::ContextUnavailable(describe(&e)))?
        .ok_or_else(|| SetupError::ContextUnavailable("WebGL2 is not supported".into()))?
        .dyn_into::<WebGl2RenderingContext>()
        .map_err(|_| SetupError::ContextUnavailable("canvas returned a non-WebGL2 context".into()))?;
    Ok(glow::Context::from_webgl2_context(context))
}

/// Embedded sources, overridden by any `<script>` element in the page whose
/// id matches a configured shader id.
fn load_shader_library(
    document: &Document,
    config: &StartupConfig,
) -> Result<ShaderLibrary, SetupError> {
    let mut library = ShaderLibrary::embedded();
    for id in [&config.vertex_shader_id, &config.fragment_shader_id] {
        let Some(script) = document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlScriptElement>().ok())
        else {
            log::debug!("no script element '{id}' in page, using embedded source");
            continue;
        };
        let text = script
            .text()
            .map_err(|e| SetupError::MissingShaderSource(format!("{id}: {}", describe(&e))))?;
        library.insert(ShaderSource::from_script(id, &script.type_(), &text)?);
        log::debug!("loaded shader '{id}' from page");
    }
    Ok(library)
}

fn report(err: &SetupError) {
    log::error!("{err}");
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(&err.to_string()).is_err() {
            log::warn!("could not show alert");
        }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#![deny(unsafe_code)]
//! Browser entry point for the hello-color triangle.
//!
//! The hosting page calls [`startup`] once after loading. It binds a WebGL2
//! context to the page's canvas, loads the shader pair (page `<script>`
//! elements first, embedded sources otherwise), and draws one frame. Any
//! failure is shown with `window.alert` and returned to the caller.

pub mod logging;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::startup;

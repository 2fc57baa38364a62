//! A [`Gl`] that records calls instead of talking to a driver.
//!
//! Handles are sequential integers. Compilation of a chosen stage, linking,
//! and attribute lookup can be made to fail.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::api::Gl;
use crate::shader_source::{ShaderStage, COLOR_ATTRIBUTE, POSITION_ATTRIBUTE};

pub const COMPILE_LOG: &str = "ERROR: 0:3: 'vColour' : undeclared identifier";
pub const LINK_LOG: &str = "ERROR: vertex/fragment varying mismatch";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    AttribLocation(String),
    EnableVertexAttribArray(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    UploadStatic(Vec<f32>),
    VertexAttribPointer {
        index: u32,
        size: i32,
        stride: i32,
        offset: i32,
    },
    Viewport(i32, i32, i32, i32),
    ClearColor([f32; 4]),
    ClearColorBuffer,
    DrawTriangles {
        first: i32,
        count: i32,
    },
}

pub struct RecordingGl {
    calls: RefCell<Vec<Call>>,
    next_handle: Cell<u32>,
    stages: RefCell<HashMap<u32, ShaderStage>>,
    attributes: Vec<String>,
    failing_stage: Option<ShaderStage>,
    fail_link: bool,
    fail_buffers: bool,
}

impl RecordingGl {
    /// A context whose programs expose the two triangle attributes.
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_handle: Cell::new(1),
            stages: RefCell::new(HashMap::new()),
            attributes: vec![POSITION_ATTRIBUTE.to_string(), COLOR_ATTRIBUTE.to_string()],
            failing_stage: None,
            fail_link: false,
            fail_buffers: false,
        }
    }

    pub fn failing_compile(mut self, stage: ShaderStage) -> Self {
        self.failing_stage = Some(stage);
        self
    }

    pub fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub fn failing_buffers(mut self) -> Self {
        self.fail_buffers = true;
        self
    }

    pub fn with_attributes(mut self, names: &[&str]) -> Self {
        self.attributes = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn handle(&self) -> u32 {
        let h = self.next_handle.get();
        self.next_handle.set(h + 1);
        h
    }
}

impl Gl for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type VertexArray = u32;
    type Buffer = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let h = self.handle();
        self.stages.borrow_mut().insert(h, stage);
        self.push(Call::CreateShader(stage, h));
        Ok(h)
    }

    fn shader_source(&self, shader: u32, _source: &str) {
        self.push(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.push(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        let stage = self.stages.borrow().get(&shader).copied();
        self.failing_stage.is_none() || stage != self.failing_stage
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        COMPILE_LOG.to_string()
    }

    fn delete_shader(&self, shader: u32) {
        self.push(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let h = self.handle();
        self.push(Call::CreateProgram(h));
        Ok(h)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.push(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.push(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.push(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: u32) -> String {
        LINK_LOG.to_string()
    }

    fn delete_program(&self, program: u32) {
        self.push(Call::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.push(Call::UseProgram(program));
    }

    fn attrib_location(&self, _program: u32, name: &str) -> Option<u32> {
        self.push(Call::AttribLocation(name.to_string()));
        self.attributes
            .iter()
            .position(|a| a == name)
            .map(|i| i as u32)
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.push(Call::EnableVertexAttribArray(index));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let h = self.handle();
        self.push(Call::CreateVertexArray(h));
        Ok(h)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.push(Call::BindVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        if self.fail_buffers {
            return Err("out of memory".to_string());
        }
        let h = self.handle();
        self.push(Call::CreateBuffer(h));
        Ok(h)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.push(Call::BindArrayBuffer(buffer));
    }

    fn upload_static_f32(&self, data: &[f32]) {
        self.push(Call::UploadStatic(data.to_vec()));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        self.push(Call::VertexAttribPointer {
            index,
            size,
            stride,
            offset,
        });
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.push(Call::Viewport(x, y, width, height));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.push(Call::ClearColor(rgba));
    }

    fn clear_color_buffer(&self) {
        self.push(Call::ClearColorBuffer);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.push(Call::DrawTriangles { first, count });
    }
}

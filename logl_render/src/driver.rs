//! The seam between the object wrappers and the graphics driver.
//!
//! [`Shader`](crate::Shader), [`Program`](crate::Program) and [`Texture`](crate::Texture) only
//! ever talk to the driver through [`Driver`], so the same code runs against the real
//! [`NativeGl`] or, in tests, against an in-memory fake.

use std::ffi::{c_void, CStr};
use std::marker::PhantomData;
use std::ptr::null_mut;

use gl::types::*;

use crate::uniform::Uniform;

/// The handful of driver calls the wrappers need. Every method maps onto one (or a short,
/// fixed sequence of) OpenGL calls; ids are the driver's own and `0` means "could not create".
pub trait Driver {
    fn create_shader(&self, kind: GLenum) -> GLuint;
    /// Uploads the source, compiles it and returns the compile status.
    fn compile_shader(&self, shader: GLuint, source: &CStr) -> bool;
    fn shader_info_log(&self, shader: GLuint) -> String;
    fn delete_shader(&self, shader: GLuint);

    fn create_program(&self) -> GLuint;
    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn detach_shader(&self, program: GLuint, shader: GLuint);
    /// Links the program and returns the link status.
    fn link_program(&self, program: GLuint) -> bool;
    fn program_info_log(&self, program: GLuint) -> String;
    fn use_program(&self, program: GLuint);
    fn delete_program(&self, program: GLuint);

    /// Returns `-1` when the program has no active uniform by that name.
    fn uniform_location(&self, program: GLuint, name: &CStr) -> GLint;
    /// Writes to a location of the program currently in use.
    fn uniform(&self, location: GLint, value: Uniform);

    fn create_texture(&self) -> GLuint;
    fn active_texture(&self, unit: GLenum);
    /// Binds to the `TEXTURE_2D` target of the active unit.
    fn bind_texture(&self, texture: GLuint);
    fn texture_parameter(&self, name: GLenum, value: GLint);
    /// Uploads tightly packed 8-bit RGBA pixels to level 0 of the bound texture.
    fn texture_image_rgba(&self, width: GLsizei, height: GLsizei, pixels: &[u8]);
    fn generate_mipmap(&self);
    fn delete_texture(&self, texture: GLuint);
}

/// The real driver. Handed out by [`Window::gl`](crate::Window::gl) once the GL function
/// pointers have been loaded; the raw pointer marker keeps it on the context's thread.
#[derive(Debug, Clone, Copy)]
pub struct NativeGl {
    _thread: PhantomData<*const ()>,
}

impl NativeGl {
    /// Only call once `gl::load_with` has run against a context current on this thread.
    pub(crate) fn loaded() -> Self {
        NativeGl {
            _thread: PhantomData,
        }
    }
}

impl Driver for NativeGl {
    fn create_shader(&self, kind: GLenum) -> GLuint {
        unsafe { gl::CreateShader(kind) }
    }

    fn compile_shader(&self, shader: GLuint, source: &CStr) -> bool {
        let mut status = gl::FALSE as GLint;
        unsafe {
            gl::ShaderSource(shader, 1, &source.as_ptr(), std::ptr::null());
            gl::CompileShader(shader);
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        }

        status != gl::FALSE as GLint
    }

    fn shader_info_log(&self, shader: GLuint) -> String {
        let mut len = 0;
        unsafe {
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        }

        let mut buf = log_buffer(len);
        unsafe {
            gl::GetShaderInfoLog(
                shader,
                buf.len() as GLsizei,
                null_mut(),
                buf.as_mut_ptr() as *mut GLchar,
            );
        }

        log_to_string(&buf)
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) }
    }

    fn create_program(&self) -> GLuint {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) }
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::DetachShader(program, shader) }
    }

    fn link_program(&self, program: GLuint) -> bool {
        let mut status = gl::FALSE as GLint;
        unsafe {
            gl::LinkProgram(program);
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        }

        status != gl::FALSE as GLint
    }

    fn program_info_log(&self, program: GLuint) -> String {
        let mut len = 0;
        unsafe {
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        }

        let mut buf = log_buffer(len);
        unsafe {
            gl::GetProgramInfoLog(
                program,
                buf.len() as GLsizei,
                null_mut(),
                buf.as_mut_ptr() as *mut GLchar,
            );
        }

        log_to_string(&buf)
    }

    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) }
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn uniform_location(&self, program: GLuint, name: &CStr) -> GLint {
        unsafe { gl::GetUniformLocation(program, name.as_ptr()) }
    }

    fn uniform(&self, location: GLint, value: Uniform) {
        unsafe {
            match value {
                Uniform::Bool(v) => gl::Uniform1i(location, bool_to_int(v)),
                Uniform::Int(v) => gl::Uniform1i(location, v),
                Uniform::Float(v) => gl::Uniform1f(location, v),
                Uniform::Vec2(v) => gl::Uniform2f(location, v.x, v.y),
                Uniform::Vec3(v) => gl::Uniform3f(location, v.x, v.y, v.z),
                Uniform::Vec4(v) => gl::Uniform4f(location, v.x, v.y, v.z, v.w),
                Uniform::Mat4(m) => {
                    let cols = m.to_cols_array();
                    gl::UniformMatrix4fv(location, 1, gl::FALSE, cols.as_ptr());
                }
            }
        }
    }

    fn create_texture(&self) -> GLuint {
        let mut id = 0;
        unsafe { gl::GenTextures(1, &mut id) };
        id
    }

    fn active_texture(&self, unit: GLenum) {
        unsafe { gl::ActiveTexture(unit) }
    }

    fn bind_texture(&self, texture: GLuint) {
        unsafe { gl::BindTexture(gl::TEXTURE_2D, texture) }
    }

    fn texture_parameter(&self, name: GLenum, value: GLint) {
        unsafe { gl::TexParameteri(gl::TEXTURE_2D, name, value) }
    }

    fn texture_image_rgba(&self, width: GLsizei, height: GLsizei, pixels: &[u8]) {
        unsafe {
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA as GLint,
                width,
                height,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                pixels.as_ptr() as *const c_void,
            );
        }
    }

    fn generate_mipmap(&self) {
        unsafe { gl::GenerateMipmap(gl::TEXTURE_2D) }
    }

    fn delete_texture(&self, texture: GLuint) {
        unsafe { gl::DeleteTextures(1, &texture) }
    }
}

/// GLSL has no boolean upload; `bool` uniforms are written as 1 or 0 through `Uniform1i`.
fn bool_to_int(v: bool) -> GLint {
    if v {
        1
    } else {
        0
    }
}

/// A zeroed buffer big enough for an info log of `len` bytes (which counts the terminator).
fn log_buffer(len: GLint) -> Vec<u8> {
    vec![0; len.max(1) as usize]
}

/// Drivers pad and terminate their logs differently; cut at the first NUL and drop trailing
/// whitespace.
fn log_to_string(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).trim_end().to_string()
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::ffi::CStr;

    use gl::types::*;

    use super::Driver;
    use crate::uniform::Uniform;

    /// Everything the fake driver has been asked to do, for tests to inspect.
    #[derive(Debug, Default)]
    pub struct State {
        next_id: GLuint,
        pub refuse_objects: bool,
        pub shaders: HashMap<GLuint, (GLenum, String)>,
        pub logs: HashMap<GLuint, String>,
        pub deleted_shaders: Vec<GLuint>,
        pub attached: HashMap<GLuint, Vec<GLuint>>,
        pub linked: HashMap<GLuint, Vec<String>>,
        pub deleted_programs: Vec<GLuint>,
        pub current_program: GLuint,
        /// (program in use, location, value)
        pub writes: Vec<(GLuint, GLint, Uniform)>,
        pub created_textures: Vec<GLuint>,
        pub active_unit: GLenum,
        /// (active unit, texture)
        pub bindings: Vec<(GLenum, GLuint)>,
        pub parameters: Vec<(GLenum, GLint)>,
        pub images: Vec<(GLsizei, GLsizei, Vec<u8>)>,
        pub mipmaps: usize,
        pub deleted_textures: Vec<GLuint>,
    }

    /// An in-memory driver. Its "compiler" accepts any source that declares `main` and has
    /// balanced braces; its "linker" wants a vertex and a fragment shader and exposes every
    /// `uniform` declared in them.
    #[derive(Debug, Default)]
    pub struct FakeGl {
        pub state: RefCell<State>,
    }

    impl FakeGl {
        pub fn new() -> Self {
            Self::default()
        }

        /// A driver that hands out `0` for every object, as a driver without a context would.
        pub fn refusing_objects() -> Self {
            let gl = Self::default();
            gl.state.borrow_mut().refuse_objects = true;
            gl
        }

        fn next_id(&self) -> GLuint {
            let mut state = self.state.borrow_mut();
            if state.refuse_objects {
                return 0;
            }

            state.next_id += 1;
            state.next_id
        }
    }

    fn syntax_error(source: &str) -> Option<String> {
        if !source.contains("void main") {
            return Some("0:1(1): error: no function with name 'main'".to_string());
        }

        if source.matches('{').count() != source.matches('}').count() {
            return Some(format!(
                "0:{}(1): error: syntax error, unexpected end of file",
                source.lines().count()
            ));
        }

        None
    }

    fn declared_uniforms(source: &str) -> Vec<String> {
        source
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("uniform "))
            .filter_map(|line| line.trim_end_matches(';').split_whitespace().last())
            .map(String::from)
            .collect()
    }

    impl Driver for FakeGl {
        fn create_shader(&self, kind: GLenum) -> GLuint {
            let id = self.next_id();
            if id != 0 {
                self.state.borrow_mut().shaders.insert(id, (kind, String::new()));
            }
            id
        }

        fn compile_shader(&self, shader: GLuint, source: &CStr) -> bool {
            let source = source.to_str().unwrap_or_default().to_string();
            let error = syntax_error(&source);

            let mut state = self.state.borrow_mut();
            if let Some(entry) = state.shaders.get_mut(&shader) {
                entry.1 = source;
            }

            match error {
                Some(log) => {
                    state.logs.insert(shader, log);
                    false
                }
                None => true,
            }
        }

        fn shader_info_log(&self, shader: GLuint) -> String {
            self.state.borrow().logs.get(&shader).cloned().unwrap_or_default()
        }

        fn delete_shader(&self, shader: GLuint) {
            self.state.borrow_mut().deleted_shaders.push(shader);
        }

        fn create_program(&self) -> GLuint {
            self.next_id()
        }

        fn attach_shader(&self, program: GLuint, shader: GLuint) {
            self.state
                .borrow_mut()
                .attached
                .entry(program)
                .or_default()
                .push(shader);
        }

        fn detach_shader(&self, program: GLuint, shader: GLuint) {
            if let Some(list) = self.state.borrow_mut().attached.get_mut(&program) {
                list.retain(|&s| s != shader);
            }
        }

        fn link_program(&self, program: GLuint) -> bool {
            let mut state = self.state.borrow_mut();
            let attached = state.attached.get(&program).cloned().unwrap_or_default();

            let kinds: Vec<GLenum> = attached
                .iter()
                .filter_map(|id| state.shaders.get(id).map(|(kind, _)| *kind))
                .collect();

            for (required, name) in &[(gl::VERTEX_SHADER, "vertex"), (gl::FRAGMENT_SHADER, "fragment")] {
                if !kinds.contains(required) {
                    state
                        .logs
                        .insert(program, format!("error: no {} shader attached", name));
                    return false;
                }
            }

            let uniforms = attached
                .iter()
                .filter_map(|id| state.shaders.get(id))
                .flat_map(|(_, source)| declared_uniforms(source))
                .collect();

            state.linked.insert(program, uniforms);
            true
        }

        fn program_info_log(&self, program: GLuint) -> String {
            self.state.borrow().logs.get(&program).cloned().unwrap_or_default()
        }

        fn use_program(&self, program: GLuint) {
            self.state.borrow_mut().current_program = program;
        }

        fn delete_program(&self, program: GLuint) {
            self.state.borrow_mut().deleted_programs.push(program);
        }

        fn uniform_location(&self, program: GLuint, name: &CStr) -> GLint {
            let name = name.to_str().unwrap_or_default();
            self.state
                .borrow()
                .linked
                .get(&program)
                .and_then(|names| names.iter().position(|n| n == name))
                .map_or(-1, |i| i as GLint)
        }

        fn uniform(&self, location: GLint, value: Uniform) {
            let mut state = self.state.borrow_mut();
            let program = state.current_program;
            state.writes.push((program, location, value));
        }

        fn create_texture(&self) -> GLuint {
            let id = self.next_id();
            self.state.borrow_mut().created_textures.push(id);
            id
        }

        fn active_texture(&self, unit: GLenum) {
            self.state.borrow_mut().active_unit = unit;
        }

        fn bind_texture(&self, texture: GLuint) {
            let mut state = self.state.borrow_mut();
            let unit = state.active_unit;
            state.bindings.push((unit, texture));
        }

        fn texture_parameter(&self, name: GLenum, value: GLint) {
            self.state.borrow_mut().parameters.push((name, value));
        }

        fn texture_image_rgba(&self, width: GLsizei, height: GLsizei, pixels: &[u8]) {
            self.state
                .borrow_mut()
                .images
                .push((width, height, pixels.to_vec()));
        }

        fn generate_mipmap(&self) {
            self.state.borrow_mut().mipmaps += 1;
        }

        fn delete_texture(&self, texture: GLuint) {
            self.state.borrow_mut().deleted_textures.push(texture);
        }
    }
}

use std::ffi::CString;
use std::fmt;
use std::fs;
use std::path::Path;

use gl::types::*;
use log::debug;

use crate::driver::Driver;
use crate::error::{RenderError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub fn gl_enum(self) -> GLenum {
        match self {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderKind::Vertex => f.write_str("Vertex Shader"),
            ShaderKind::Fragment => f.write_str("Fragment Shader"),
        }
    }
}

/// A successfully compiled shader. Once it's been linked into every program that needs it, it
/// should be [deleted](Shader::delete); programs don't hold on to their shaders.
#[derive(Debug)]
pub struct Shader {
    kind: ShaderKind,
    source: String,
    id: GLuint,
}

impl Shader {
    /// Reads the file at `path` and compiles it.
    pub fn read<D: Driver>(gl: &D, kind: ShaderKind, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("read {} from {}", kind, path.display());
        Self::compile(gl, kind, &source)
    }

    /// Compiles `source`. On failure the error carries the kind, the source as given and the
    /// driver's log.
    pub fn compile<D: Driver>(gl: &D, kind: ShaderKind, source: &str) -> Result<Self> {
        let c_source = CString::new(source).map_err(|e| RenderError::Compile {
            kind,
            code: source.to_string(),
            log: format!("source contains a NUL byte at offset {}", e.nul_position()),
        })?;

        let id = gl.create_shader(kind.gl_enum());
        if id == 0 {
            return Err(RenderError::Create(format!("shader: type = {}", kind)));
        }

        if !gl.compile_shader(id, &c_source) {
            let log = gl.shader_info_log(id);
            gl.delete_shader(id);

            return Err(RenderError::Compile {
                kind,
                code: source.to_string(),
                log,
            });
        }

        debug!("compiled {}: id = {}", kind, id);
        Ok(Shader {
            kind,
            source: source.to_string(),
            id,
        })
    }

    pub fn kind(&self) -> ShaderKind {
        self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn delete<D: Driver>(self, gl: &D) {
        gl.delete_shader(self.id);
    }
}

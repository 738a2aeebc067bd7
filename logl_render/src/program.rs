use std::ffi::CString;

use gl::types::*;
use log::debug;

use crate::driver::Driver;
use crate::error::{RenderError, Result};
use crate::shader::Shader;
use crate::uniform::Uniform;

/// A linked shader program, i.e. the programmable part of the graphics pipeline.
#[derive(Debug)]
pub struct Program {
    id: GLuint,
}

impl Program {
    /// Links `shaders` into a new program. The shaders are detached again afterwards, so the
    /// caller is free to [delete](Shader::delete) them; that's not done here.
    pub fn link<D: Driver>(gl: &D, shaders: &[&Shader]) -> Result<Self> {
        if shaders.is_empty() {
            return Err(RenderError::NoShaders);
        }

        let id = gl.create_program();
        if id == 0 {
            return Err(RenderError::Create(String::from("program")));
        }

        for shader in shaders {
            gl.attach_shader(id, shader.id());
        }

        if !gl.link_program(id) {
            let log = gl.program_info_log(id);
            gl.delete_program(id);

            return Err(RenderError::Link { log });
        }

        for shader in shaders {
            gl.detach_shader(id, shader.id());
        }

        debug!("linked program: id = {}, shaders = {}", id, shaders.len());
        Ok(Program { id })
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Makes this the program in use. Uniforms can only be written through the returned
    /// handle, which is what keeps them pointed at the right program.
    pub fn activate<'a, D: Driver>(&'a self, gl: &'a D) -> ActiveProgram<'a, D> {
        gl.use_program(self.id);
        ActiveProgram { program: self, gl }
    }

    pub fn delete<D: Driver>(self, gl: &D) {
        gl.delete_program(self.id);
    }
}

/// A [`Program`] that is currently in use.
#[derive(Debug)]
pub struct ActiveProgram<'a, D: Driver> {
    program: &'a Program,
    gl: &'a D,
}

impl<'a, D: Driver> ActiveProgram<'a, D> {
    pub fn program(&self) -> &Program {
        self.program
    }

    /// Writes `value` to the uniform called `name`. The location is looked up on every call.
    pub fn set(&self, name: &str, value: impl Into<Uniform>) -> Result<()> {
        let location = self.location(name)?;
        self.gl.uniform(location, value.into());
        Ok(())
    }

    fn location(&self, name: &str) -> Result<GLint> {
        let c_name =
            CString::new(name).map_err(|_| RenderError::UniformNotFound(name.to_string()))?;

        match self.gl.uniform_location(self.program.id, &c_name) {
            -1 => Err(RenderError::UniformNotFound(name.to_string())),
            location => Ok(location),
        }
    }
}

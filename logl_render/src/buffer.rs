//! Vertex arrays and the buffers that feed them.
//!
//! A [vertex buffer object (VBO)](https://www.khronos.org/opengl/wiki/Vertex_Specification#Vertex_Buffer_Object)
//! is a block of vertex data living on the graphics card. Vertices don't have to be spatial;
//! they can carry colours, texture coordinates or anything else the vertex shader reads. An
//! element buffer (EBO) is a list of vertex indices, so a quad can be drawn as two triangles
//! without sending the shared corners twice. A vertex array object (VAO) remembers which
//! buffers are bound and how their contents map onto shader attributes.
//!
//! These aren't behind the [`Driver`](crate::Driver) seam; they only exist to be drawn, so the
//! functions ask for a [`NativeGl`] to prove a context is current.

use std::ffi::c_void;
use std::mem::size_of;

use gl::types::*;

use crate::driver::NativeGl;

#[derive(Debug)]
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    /// Generates a new vertex array and binds it.
    pub fn init(_gl: &NativeGl) -> Self {
        let mut id = 0;
        unsafe { gl::GenVertexArrays(1, &mut id) };

        let vao = VertexArray { id };
        vao.bind();
        vao
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) }
    }

    pub fn delete(self) {
        unsafe { gl::DeleteVertexArrays(1, &self.id) }
    }
}

#[derive(Debug)]
pub struct VertexBuffer {
    id: GLuint,
}

impl VertexBuffer {
    /// Generates a buffer, binds it to `ARRAY_BUFFER` and uploads `data` as static draw data.
    pub fn init(_gl: &NativeGl, data: &[f32]) -> Self {
        let vbo = VertexBuffer { id: generate() };
        vbo.bind();
        upload(gl::ARRAY_BUFFER, data);
        vbo
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, self.id) }
    }

    pub fn delete(self) {
        unsafe { gl::DeleteBuffers(1, &self.id) }
    }
}

#[derive(Debug)]
pub struct ElementBuffer {
    id: GLuint,
    count: usize,
}

impl ElementBuffer {
    /// Generates a buffer, binds it to `ELEMENT_ARRAY_BUFFER` and uploads the indices. Bind the
    /// vertex array first; the binding is recorded in it.
    pub fn init(_gl: &NativeGl, indices: &[u32]) -> Self {
        let ebo = ElementBuffer {
            id: generate(),
            count: indices.len(),
        };
        ebo.bind();
        upload(gl::ELEMENT_ARRAY_BUFFER, indices);
        ebo
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Number of indices, as `DrawElements` wants it.
    pub fn count(&self) -> GLsizei {
        self.count as GLsizei
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.id) }
    }

    pub fn delete(self) {
        unsafe { gl::DeleteBuffers(1, &self.id) }
    }
}

fn generate() -> GLuint {
    let mut id = 0;
    unsafe { gl::GenBuffers(1, &mut id) };
    id
}

fn upload<T>(target: GLenum, data: &[T]) {
    unsafe {
        gl::BufferData(
            target,
            (data.len() * size_of::<T>()) as GLsizeiptr,
            data.as_ptr() as *const c_void,
            gl::STATIC_DRAW,
        );
    }
}

/// How one shader attribute is laid out inside interleaved float vertices. All three numbers
/// count floats, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub index: GLuint,
    pub size: GLint,
    pub stride: usize,
    pub offset: usize,
}

impl VertexAttribute {
    pub fn new(index: GLuint, size: GLint, stride: usize, offset: usize) -> Self {
        VertexAttribute {
            index,
            size,
            stride,
            offset,
        }
    }

    pub fn stride_bytes(&self) -> GLsizei {
        (self.stride * size_of::<f32>()) as GLsizei
    }

    pub fn offset_bytes(&self) -> usize {
        self.offset * size_of::<f32>()
    }

    /// Points the attribute at the bound `ARRAY_BUFFER` and enables it on the bound vertex
    /// array.
    pub fn enable(&self, _gl: &NativeGl) {
        unsafe {
            gl::VertexAttribPointer(
                self.index,
                self.size,
                gl::FLOAT,
                gl::FALSE,
                self.stride_bytes(),
                self.offset_bytes() as *const c_void,
            );
            gl::EnableVertexAttribArray(self.index);
        }
    }
}

/// Attributes for vertices made of consecutive groups of `sizes[i]` floats, e.g. `&[3, 3, 2]`
/// for position, colour and texture coordinates.
pub fn interleaved(sizes: &[GLint]) -> Vec<VertexAttribute> {
    let stride = sizes.iter().sum::<GLint>() as usize;

    sizes
        .iter()
        .scan(0usize, |offset, &size| {
            let start = *offset;
            *offset += size as usize;
            Some((start, size))
        })
        .enumerate()
        .map(|(index, (offset, size))| VertexAttribute::new(index as GLuint, size, stride, offset))
        .collect()
}

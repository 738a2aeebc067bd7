//! Two triangles side by side, both stored in a single vertex buffer.

use anyhow::Context;
use render::buffer::{interleaved, VertexArray, VertexBuffer};
use render::{Color, Window};

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
    -1.0, 0.0, 0.0,
    -0.5, 0.5, 0.0,
     0.0, 0.0, 0.0,

     0.0, 0.0, 0.0,
     0.5, 0.5, 0.0,
     1.0, 0.0, 0.0,
];

fn app() -> anyhow::Result<()> {
    let mut window =
        Window::new("Two Triangles Single VBO", true, 800, 600).context("failed to create window")?;
    let gl = window.gl();

    let program = logl::load_program(&gl, "shaders/triangle/vert.glsl", "shaders/triangle/frag.glsl")?;

    let vao = VertexArray::init(&gl);
    let _vbo = VertexBuffer::init(&gl, &VERTICES);
    for attribute in interleaved(&[3]) {
        attribute.enable(&gl);
    }

    window.clear_color(Color::BLACK);

    window.render(|_| -> anyhow::Result<()> {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT) };

        program.activate(&gl);
        vao.bind();
        unsafe { gl::DrawArrays(gl::TRIANGLES, 0, 6) };

        Ok(())
    })?;

    window.destroy();
    Ok(())
}

fn main() {
    logl::run(app)
}

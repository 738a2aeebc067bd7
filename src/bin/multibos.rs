//! Two triangles, each with its own vertex array and vertex buffer.

use anyhow::Context;
use render::buffer::{interleaved, VertexArray, VertexBuffer};
use render::{Color, Window};

#[rustfmt::skip]
const LEFT: [f32; 9] = [
    -1.0, 0.0, 0.0,
    -0.5, 0.5, 0.0,
     0.0, 0.0, 0.0,
];

#[rustfmt::skip]
const RIGHT: [f32; 9] = [
    0.0, 0.0, 0.0,
    0.5, 0.5, 0.0,
    1.0, 0.0, 0.0,
];

fn app() -> anyhow::Result<()> {
    let mut window = Window::new("Two Triangles, Multi VBO/VAO", false, 800, 600)
        .context("failed to create window")?;
    let gl = window.gl();

    let program = logl::load_program(&gl, "shaders/triangle/vert.glsl", "shaders/triangle/frag.glsl")?;

    let mut triangles = Vec::new();
    for vertices in &[LEFT, RIGHT] {
        let vao = VertexArray::init(&gl);
        let vbo = VertexBuffer::init(&gl, vertices);
        for attribute in interleaved(&[3]) {
            attribute.enable(&gl);
        }
        triangles.push((vao, vbo));
    }

    window.clear_color(Color::WHITE);

    window.render(|_| -> anyhow::Result<()> {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT) };

        program.activate(&gl);
        for (vao, _) in &triangles {
            vao.bind();
            unsafe { gl::DrawArrays(gl::TRIANGLES, 0, 3) };
        }

        Ok(())
    })?;

    window.destroy();
    Ok(())
}

fn main() {
    logl::run(app)
}

//! More attributes: a colour per vertex, plus a uniform that shifts the whole triangle.

use anyhow::Context;
use render::buffer::{interleaved, VertexArray, VertexBuffer};
use render::{Color, Window};

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
    // positions       // colours
     0.5, -0.5, 0.0,   1.0, 0.0, 0.0,   // bottom right
    -0.5, -0.5, 0.0,   0.0, 1.0, 0.0,   // bottom left
     0.0,  0.5, 0.0,   0.0, 0.0, 1.0,   // top
];

const X_OFFSET: f32 = -0.5;

fn app() -> anyhow::Result<()> {
    let mut window = Window::new("More Attributes!", false, 800, 600).context("failed to create window")?;
    let gl = window.gl();

    let program = logl::load_program(&gl, "shaders/offset/vert.glsl", "shaders/offset/frag.glsl")?;

    let vao = VertexArray::init(&gl);
    let _vbo = VertexBuffer::init(&gl, &VERTICES);
    for attribute in interleaved(&[3, 3]) {
        attribute.enable(&gl);
    }

    window.clear_color(Color::WHITE);

    window.render(|_| -> anyhow::Result<()> {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };

        let active = program.activate(&gl);
        active.set("xoffset", X_OFFSET)?;

        vao.bind();
        unsafe { gl::DrawArrays(gl::TRIANGLES, 0, 3) };

        Ok(())
    })?;

    window.destroy();
    Ok(())
}

fn main() {
    logl::run(app)
}

//! A triangle whose green channel pulses with time, set through a uniform every frame.

use anyhow::Context;
use glam::Vec4;
use render::buffer::{interleaved, VertexArray, VertexBuffer};
use render::{Color, Key, Window};

#[rustfmt::skip]
const VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
     0.5, -0.5, 0.0,
];

fn app() -> anyhow::Result<()> {
    let mut window = Window::new("Uniform", false, 800, 600).context("failed to create window")?;
    let gl = window.gl();

    let program = logl::load_program(&gl, "shaders/uniforms/vert.glsl", "shaders/uniforms/frag.glsl")?;

    let vao = VertexArray::init(&gl);
    let _vbo = VertexBuffer::init(&gl, &VERTICES);
    for attribute in interleaved(&[3]) {
        attribute.enable(&gl);
    }

    window.clear_color(Color::BLACK);

    let mut colour = Vec4::new(0.0, 0.0, 0.0, 1.0);

    window.render(|frame| -> anyhow::Result<()> {
        if frame.is_pressed(Key::Escape) {
            frame.close();
        }

        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };

        colour.y = (frame.time().sin() / 2.0 + 0.5) as f32;

        let active = program.activate(&gl);
        active.set("ourColor", colour)?;

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

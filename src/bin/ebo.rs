//! A rectangle drawn from four vertices and six indices. W toggles wireframe, Esc closes.

use std::ptr::null;

use anyhow::Context;
use render::buffer::{interleaved, ElementBuffer, VertexArray, VertexBuffer};
use render::{Color, Key, Window};

#[rustfmt::skip]
const VERTICES: [f32; 12] = [
     0.5,  0.5, 0.0,
    -0.5,  0.5, 0.0,
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
];

#[rustfmt::skip]
const INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

fn app() -> anyhow::Result<()> {
    let mut window = Window::new("EBO", true, 800, 600).context("failed to create new window")?;
    let gl = window.gl();

    let program = logl::load_program(&gl, "shaders/triangle/vert.glsl", "shaders/triangle/frag.glsl")?;

    let vao = VertexArray::init(&gl);
    let _vbo = VertexBuffer::init(&gl, &VERTICES);
    let ebo = ElementBuffer::init(&gl, &INDICES);
    for attribute in interleaved(&[3]) {
        attribute.enable(&gl);
    }

    window.clear_color(Color::BLACK);

    let mut wireframe = false;

    window.render(|frame| -> anyhow::Result<()> {
        if frame.is_pressed(Key::Escape) {
            frame.close();
        }

        // toggles on every frame the key is down, so a long press flickers
        if frame.is_pressed(Key::W) {
            wireframe = !wireframe;
        }

        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
            gl::PolygonMode(gl::FRONT_AND_BACK, if wireframe { gl::LINE } else { gl::FILL });
        }

        program.activate(&gl);
        vao.bind();
        unsafe { gl::DrawElements(gl::TRIANGLES, ebo.count(), gl::UNSIGNED_INT, null()) };

        Ok(())
    })?;

    window.destroy();
    Ok(())
}

fn main() {
    logl::run(app)
}

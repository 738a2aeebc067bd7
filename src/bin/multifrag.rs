//! Two triangles drawn with two programs that share a vertex shader: one green, one yellow.

use anyhow::Context;
use render::buffer::{interleaved, VertexArray, VertexBuffer};
use render::{Color, Program, Shader, ShaderKind, Window};

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
    let mut window = Window::new("Multi Fragment", false, 800, 600).context("failed to create window")?;
    let gl = window.gl();

    let fshg = Shader::read(&gl, ShaderKind::Fragment, logl::asset("shaders/triangle/fragg.glsl"))?;
    let fshy = Shader::read(&gl, ShaderKind::Fragment, logl::asset("shaders/triangle/fragy.glsl"))?;
    let vsh = Shader::read(&gl, ShaderKind::Vertex, logl::asset("shaders/triangle/vert.glsl"))?;

    let green = Program::link(&gl, &[&vsh, &fshg])?;
    let yellow = Program::link(&gl, &[&vsh, &fshy])?;

    fshg.delete(&gl);
    fshy.delete(&gl);
    vsh.delete(&gl);

    let left = VertexArray::init(&gl);
    let _left_vbo = VertexBuffer::init(&gl, &LEFT);
    for attribute in interleaved(&[3]) {
        attribute.enable(&gl);
    }

    let right = VertexArray::init(&gl);
    let _right_vbo = VertexBuffer::init(&gl, &RIGHT);
    for attribute in interleaved(&[3]) {
        attribute.enable(&gl);
    }

    window.clear_color(Color::BLACK);

    window.render(|_| -> anyhow::Result<()> {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT) };

        green.activate(&gl);
        left.bind();
        unsafe { gl::DrawArrays(gl::TRIANGLES, 0, 3) };

        yellow.activate(&gl);
        right.bind();
        unsafe { gl::DrawArrays(gl::TRIANGLES, 0, 3) };

        Ok(())
    })?;

    window.destroy();
    Ok(())
}

fn main() {
    logl::run(app)
}

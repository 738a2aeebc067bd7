//! Hello Triangle: one orange triangle, with the shader source inline.

use anyhow::Context;
use log::info;
use render::buffer::{interleaved, VertexArray, VertexBuffer};
use render::{Color, Program, Shader, ShaderKind, Window};

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;

#[rustfmt::skip]
const VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

fn app() -> anyhow::Result<()> {
    info!("application starting");

    let mut window = Window::new("Simple Triangle", true, 800, 600)
        .context("failed to create window (and associated gl resources)")?;
    let gl = window.gl();

    let vsh = Shader::compile(&gl, ShaderKind::Vertex, VERTEX_SHADER)
        .context("failed to create vertex shader")?;
    let fsh = Shader::compile(&gl, ShaderKind::Fragment, FRAGMENT_SHADER)
        .context("failed to create fragment shader")?;
    let program = Program::link(&gl, &[&vsh, &fsh]).context("failed to link program")?;

    vsh.delete(&gl);
    fsh.delete(&gl);

    let vao = VertexArray::init(&gl);
    let _vbo = VertexBuffer::init(&gl, &VERTICES);
    for attribute in interleaved(&[3]) {
        attribute.enable(&gl);
    }

    window.clear_color(Color::WHITE);

    window.render(|_| -> anyhow::Result<()> {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT) };

        program.activate(&gl);
        vao.bind();
        unsafe { gl::DrawArrays(gl::TRIANGLES, 0, 3) };

        Ok(())
    })?;

    window.destroy();
    info!("application exiting");
    Ok(())
}

fn main() {
    logl::run(app)
}

//! Transformations: one face spinning in the bottom right corner and one pulsing in the top
//! left, both driven by a `transform` matrix uniform.

use std::ptr::null;

use anyhow::Context;
use glam::{Mat4, Vec3, Vec4};
use render::buffer::{interleaved, ElementBuffer, VertexArray, VertexBuffer};
use render::{Color, Key, Texture, TextureOpts, TextureUnit, Window};

#[rustfmt::skip]
const VERTICES: [f32; 32] = [
    // positions        // colours        // texture coords
     0.5,  0.5, 0.0,    1.0, 0.0, 0.0,    1.0, 1.0,   // top right
     0.5, -0.5, 0.0,    0.0, 1.0, 0.0,    1.0, 0.0,   // bottom right
    -0.5, -0.5, 0.0,    0.0, 0.0, 1.0,    0.0, 0.0,   // bottom left
    -0.5,  0.5, 0.0,    1.0, 1.0, 0.0,    0.0, 1.0,   // top left
];

#[rustfmt::skip]
const INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

fn app() -> anyhow::Result<()> {
    let v = Mat4::from_translation(Vec3::new(1.0, 1.0, 0.0)) * Vec4::new(1.0, 0.0, 0.0, 1.0);
    println!("[x={:.6}, y={:.6}, z={:.6}]", v.x, v.y, v.z);

    let mut window = Window::new("Transform", false, 800, 600).context("failed to create window")?;
    let gl = window.gl();

    let program = logl::load_program(&gl, "shaders/transform/vert.glsl", "shaders/transform/frag.glsl")?;

    let face = Texture::read(
        &gl,
        logl::asset("textures/awesomeface.png"),
        TextureOpts {
            flip_y: true,
            ..Default::default()
        },
    )?;

    let vao = VertexArray::init(&gl);
    let _vbo = VertexBuffer::init(&gl, &VERTICES);
    let ebo = ElementBuffer::init(&gl, &INDICES);
    for attribute in interleaved(&[3, 3, 2]) {
        attribute.enable(&gl);
    }

    window.clear_color(Color::WHITE);

    program.activate(&gl).set("awesomeTexture", TextureUnit::UNIT0.index())?;

    window.render(|frame| -> anyhow::Result<()> {
        if frame.is_pressed(Key::Escape) {
            frame.close();
        }

        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };

        let active = program.activate(&gl);
        face.bind(&gl, TextureUnit::UNIT0);
        vao.bind();

        let time = frame.time() as f32;

        let spin = Mat4::from_translation(Vec3::new(0.5, -0.5, 0.0)) * Mat4::from_rotation_z(time);
        active.set("transform", spin)?;
        unsafe { gl::DrawElements(gl::TRIANGLES, ebo.count(), gl::UNSIGNED_INT, null()) };

        let scale = time.sin();
        let pulse = Mat4::from_translation(Vec3::new(-0.5, 0.5, 0.0)) * Mat4::from_scale(Vec3::splat(scale));
        active.set("transform", pulse)?;
        unsafe { gl::DrawElements(gl::TRIANGLES, ebo.count(), gl::UNSIGNED_INT, null()) };

        Ok(())
    })?;

    window.destroy();
    Ok(())
}

fn main() {
    logl::run(app)
}

//! Textures: a crate with a face on it. M mixes the two textures, B blends the crate with the
//! vertex colours, N shows the crate alone. Up and Down change how much face is mixed in.

use std::ptr::null;

use anyhow::Context;
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

/// Held keys repeat every frame, so the step is kept small.
const MIXTURE_STEP: f32 = 0.001;

fn app() -> anyhow::Result<()> {
    let mut window = Window::new("Container Texture", false, 800, 600).context("failed to create window")?;
    let gl = window.gl();

    let program = logl::load_program(&gl, "shaders/container/vert.glsl", "shaders/container/frag.glsl")?;

    let container = Texture::read(&gl, logl::asset("textures/container.png"), TextureOpts::default())?;
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

    // samplers only need pointing at their units once
    {
        let active = program.activate(&gl);
        active.set("containerTexture", TextureUnit::UNIT0.index())?;
        active.set("awesomeTexture", TextureUnit::UNIT1.index())?;
    }

    let mut mix = false;
    let mut blend = false;
    let mut mixture = 0.2f32;

    window.render(|frame| -> anyhow::Result<()> {
        if frame.is_pressed(Key::Escape) {
            frame.close();
        }

        if frame.is_pressed(Key::M) {
            mix = true;
            blend = false;
        }

        if frame.is_pressed(Key::N) {
            mix = false;
            blend = false;
        }

        if frame.is_pressed(Key::B) {
            mix = false;
            blend = true;
        }

        if frame.is_pressed(Key::Up) {
            mixture = (mixture + MIXTURE_STEP).min(1.0);
        }

        if frame.is_pressed(Key::Down) {
            mixture = (mixture - MIXTURE_STEP).max(0.0);
        }

        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };

        let active = program.activate(&gl);
        active.set("mixture", mixture)?;
        active.set("ismix", mix)?;
        active.set("isblend", blend)?;

        container.bind(&gl, TextureUnit::UNIT0);
        face.bind(&gl, TextureUnit::UNIT1);

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

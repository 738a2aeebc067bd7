//! Hello Window: an empty window whose clear colour can be cycled with A and stopped with S.

use anyhow::Context;
use log::info;
use render::{Color, Key, Window};

fn app() -> anyhow::Result<()> {
    let mut window = Window::new("LearnOpenGL", true, 800, 600).context("failed to create window")?;

    let mut cycle = false;
    let mut colour = 0.0f64;

    window.render(|frame| -> anyhow::Result<()> {
        if frame.is_pressed(Key::Escape) && !frame.should_close() {
            info!("shutting window to close on ESC key press");
            frame.close();
        }

        if frame.is_pressed(Key::A) {
            cycle = true;
        }

        if frame.is_pressed(Key::S) {
            cycle = false;
        }

        if cycle {
            colour += 0.005;
            frame.clear_color(Color::grey(colour.sin() as f32));
        } else {
            frame.clear_color(Color::rgb(0.2, 0.3, 0.3));
        }

        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
        Ok(())
    })?;

    window.destroy();
    Ok(())
}

fn main() {
    logl::run(app)
}

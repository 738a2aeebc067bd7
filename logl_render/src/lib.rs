//! A small set of wrappers around the OpenGL API, shared by the example programs.
//!
//! Every chapter of the tutorial repeats the same dance: open a window, compile a vertex and a
//! fragment shader, link them, push some vertices to the graphics card and draw them every frame.
//! The raw calls for that are unsafe and cryptic, so this crate puts a safe face on them without
//! trying to be an engine. Objects follow the API's own lifecycle (create, configure, use,
//! delete) and every failure comes back as a [`RenderError`] carrying whatever the driver said.
//!
//! The shader, program and texture calls go through the [`Driver`] trait. [`NativeGl`] is the
//! real implementation and can only be obtained from a live [`Window`], which guarantees the GL
//! function pointers are loaded and a context is current on this thread.
//!
//! Useful reading: [Learn OpenGL](https://learnopengl.com/) and
//! [Rust and OpenGL from scratch](http://nercury.github.io/rust/opengl/tutorial/2018/02/08/opengl-in-rust-from-scratch-00-setup.html).

pub mod buffer;
pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod program;
pub mod shader;
pub mod texture;
pub mod uniform;
pub mod window;

pub use self::color::Color;
pub use self::config::WindowConfig;
pub use self::driver::{Driver, NativeGl};
pub use self::error::{RenderError, Result};
pub use self::program::{ActiveProgram, Program};
pub use self::shader::{Shader, ShaderKind};
pub use self::texture::{Texture, TextureFilter, TextureOpts, TextureUnit, TextureWrap};
pub use self::uniform::Uniform;
pub use self::window::{Frame, Lifecycle, Window};

/// Keys as reported by the window system.
pub use glutin::event::VirtualKeyCode as Key;

//! Plumbing shared by the example programs under `src/bin`.
//!
//! Every example is a straight-line `app` function returning `anyhow::Result`; [`run`] sets up
//! logging, calls it, and turns an error into a printed message and exit status 1.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use log::error;
use render::{Driver, Program, Shader, ShaderKind};

/// Shaders and textures live next to the manifest, so examples work from any directory.
pub const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

pub fn asset(relative: impl AsRef<Path>) -> PathBuf {
    Path::new(ASSETS_DIR).join(relative)
}

/// Runs an example and exits the process: 0 when the window was closed normally, 1 when
/// anything failed along the way.
pub fn run<F>(app: F) -> !
where
    F: FnOnce() -> anyhow::Result<()>,
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match app() {
        Ok(()) => process::exit(0),
        Err(e) => {
            error!("example failed");
            println!("{:#}", e);
            process::exit(1)
        }
    }
}

/// Reads, compiles and links a vertex/fragment pair from the assets directory, deleting the
/// shaders once they're linked.
pub fn load_program<D: Driver>(gl: &D, vertex: &str, fragment: &str) -> anyhow::Result<Program> {
    let vsh = Shader::read(gl, ShaderKind::Vertex, asset(vertex))?;
    let fsh = Shader::read(gl, ShaderKind::Fragment, asset(fragment))?;

    let program = Program::link(gl, &[&vsh, &fsh])
        .with_context(|| format!("linking {} with {}", vertex, fragment))?;

    vsh.delete(gl);
    fsh.delete(gl);

    Ok(program)
}

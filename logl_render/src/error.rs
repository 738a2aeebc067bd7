use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::shader::ShaderKind;

pub type Result<T> = std::result::Result<T, RenderError>;

/// Everything that can go wrong between opening a window and drawing to it. None of these are
/// recovered from internally; the caller gets the driver's text and decides what to do (the
/// examples just print it and exit).
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("unsupported stride: width = {width}, stride = {stride}")]
    UnsupportedStride { width: u32, stride: usize },

    #[error("failed to compile shader: type = {kind}, source = {code}, log = {log}")]
    Compile {
        kind: ShaderKind,
        code: String,
        log: String,
    },

    #[error("no shaders specified to link into program")]
    NoShaders,

    #[error("failed to link program: log = {log}")]
    Link { log: String },

    #[error("failed to locate uniform: name = {0}")]
    UniformNotFound(String),

    #[error("failed to create {0}")]
    Create(String),

    #[error("failed to initialise {0}")]
    Init(String),

    #[error("context error: {0}")]
    Context(String),
}

use glam::{Mat4, Vec2, Vec3, Vec4};

/// A value that can be written to a uniform. Anything that converts into this can be handed to
/// [`ActiveProgram::set`](crate::ActiveProgram::set).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    /// GLSL has no boolean uniform setter, so this goes up as an integer 1 or 0.
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

impl From<bool> for Uniform {
    fn from(v: bool) -> Self {
        Uniform::Bool(v)
    }
}

impl From<i32> for Uniform {
    fn from(v: i32) -> Self {
        Uniform::Int(v)
    }
}

impl From<f32> for Uniform {
    fn from(v: f32) -> Self {
        Uniform::Float(v)
    }
}

impl From<Vec2> for Uniform {
    fn from(v: Vec2) -> Self {
        Uniform::Vec2(v)
    }
}

impl From<Vec3> for Uniform {
    fn from(v: Vec3) -> Self {
        Uniform::Vec3(v)
    }
}

impl From<Vec4> for Uniform {
    fn from(v: Vec4) -> Self {
        Uniform::Vec4(v)
    }
}

impl From<Mat4> for Uniform {
    fn from(v: Mat4) -> Self {
        Uniform::Mat4(v)
    }
}

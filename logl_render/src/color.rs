/// An RGBA colour, mostly used to clear the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Fully opaque colour.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color::new(r, g, b, 1.0)
    }

    /// Same value in all three channels.
    pub const fn grey(v: f32) -> Self {
        Color::rgb(v, v, v)
    }
}

impl From<Color> for glam::Vec4 {
    fn from(c: Color) -> Self {
        glam::Vec4::new(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    #[test]
    fn constants_are_opaque() {
        assert_eq!(Color::WHITE, Color::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(Color::BLACK, Color::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn converts_to_vec4_in_rgba_order() {
        let v: glam::Vec4 = Color::new(0.1, 0.2, 0.3, 0.4).into();
        assert_eq!(v, glam::Vec4::new(0.1, 0.2, 0.3, 0.4));
    }
}

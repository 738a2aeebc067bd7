//! 2D textures decoded from image files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use gl::types::*;
use image::{imageops, ImageReader, RgbaImage};
use log::{debug, warn};

use crate::driver::Driver;
use crate::error::{RenderError, Result};

/// What happens to texture coordinates outside `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureWrap {
    Repeat,
    ClampToEdge,
    MirroredRepeat,
}

impl TextureWrap {
    pub const ALL: [TextureWrap; 3] = [
        TextureWrap::Repeat,
        TextureWrap::ClampToEdge,
        TextureWrap::MirroredRepeat,
    ];

    pub fn gl_enum(self) -> GLenum {
        match self {
            TextureWrap::Repeat => gl::REPEAT,
            TextureWrap::ClampToEdge => gl::CLAMP_TO_EDGE,
            TextureWrap::MirroredRepeat => gl::MIRRORED_REPEAT,
        }
    }
}

/// Sampling used when the texture is minified or magnified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl TextureFilter {
    pub const ALL: [TextureFilter; 6] = [
        TextureFilter::Nearest,
        TextureFilter::Linear,
        TextureFilter::NearestMipmapNearest,
        TextureFilter::LinearMipmapNearest,
        TextureFilter::NearestMipmapLinear,
        TextureFilter::LinearMipmapLinear,
    ];

    pub fn gl_enum(self) -> GLenum {
        match self {
            TextureFilter::Nearest => gl::NEAREST,
            TextureFilter::Linear => gl::LINEAR,
            TextureFilter::NearestMipmapNearest => gl::NEAREST_MIPMAP_NEAREST,
            TextureFilter::LinearMipmapNearest => gl::LINEAR_MIPMAP_NEAREST,
            TextureFilter::NearestMipmapLinear => gl::NEAREST_MIPMAP_LINEAR,
            TextureFilter::LinearMipmapLinear => gl::LINEAR_MIPMAP_LINEAR,
        }
    }

    pub fn uses_mipmaps(self) -> bool {
        !matches!(self, TextureFilter::Nearest | TextureFilter::Linear)
    }
}

/// One of the sixteen texture units every GL 3.3 implementation guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureUnit(u32);

impl TextureUnit {
    pub const COUNT: u32 = 16;

    pub const UNIT0: TextureUnit = TextureUnit(0);
    pub const UNIT1: TextureUnit = TextureUnit(1);
    pub const UNIT2: TextureUnit = TextureUnit(2);
    pub const UNIT3: TextureUnit = TextureUnit(3);

    pub fn new(index: u32) -> Option<Self> {
        if index < Self::COUNT {
            Some(TextureUnit(index))
        } else {
            None
        }
    }

    /// The value a sampler uniform needs to read from this unit.
    pub fn index(self) -> i32 {
        self.0 as i32
    }

    /// The `TEXTUREn` constant for this unit.
    pub fn binding(self) -> GLenum {
        gl::TEXTURE0 + self.0
    }
}

/// Options used when creating a texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureOpts {
    pub gen_mipmap: bool,
    pub wrap_s: TextureWrap,
    pub wrap_t: TextureWrap,
    pub min_filter: TextureFilter,
    pub mag_filter: TextureFilter,
    /// Images are stored top row first but GL samples bottom row first.
    pub flip_y: bool,
}

impl Default for TextureOpts {
    fn default() -> Self {
        TextureOpts {
            gen_mipmap: true,
            wrap_s: TextureWrap::Repeat,
            wrap_t: TextureWrap::Repeat,
            min_filter: TextureFilter::Linear,
            mag_filter: TextureFilter::Linear,
            flip_y: false,
        }
    }
}

/// Decodes the image at `path` into tightly packed RGBA, flipped if asked.
pub fn decode(path: impl AsRef<Path>, opts: &TextureOpts) -> Result<RgbaImage> {
    let path = path.as_ref();
    let io_error = |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };
    let decode_error = |source| RenderError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let img = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(io_error)?
        .decode()
        .map_err(decode_error)?;

    let mut rgba = img.to_rgba8();
    check_stride(&rgba)?;

    if opts.flip_y {
        imageops::flip_vertical_in_place(&mut rgba);
    }

    debug!(
        "decoded {}: {}x{}",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}

/// The upload path assumes rows follow each other with no padding.
fn check_stride(img: &RgbaImage) -> Result<()> {
    let (width, height) = img.dimensions();
    let stride = match height {
        0 => 0,
        h => img.as_raw().len() / h as usize,
    };

    if stride != width as usize * 4 {
        return Err(RenderError::UnsupportedStride { width, stride });
    }

    Ok(())
}

/// An uploaded 2D texture.
#[derive(Debug)]
pub struct Texture {
    id: GLuint,
}

impl Texture {
    /// Decodes the image at `path` and uploads it.
    pub fn read<D: Driver>(gl: &D, path: impl AsRef<Path>, opts: TextureOpts) -> Result<Self> {
        let img = decode(path, &opts)?;
        Self::upload(gl, &img, opts)
    }

    /// Uploads already decoded pixels. Flipping is [`decode`]'s job, so `opts.flip_y` is
    /// ignored here.
    pub fn upload<D: Driver>(gl: &D, img: &RgbaImage, opts: TextureOpts) -> Result<Self> {
        check_stride(img)?;

        if opts.mag_filter.uses_mipmaps() {
            warn!(
                "{:?} is not a valid magnification filter, the driver will reject it",
                opts.mag_filter
            );
        }

        if opts.min_filter.uses_mipmaps() && !opts.gen_mipmap {
            warn!(
                "{:?} samples mipmaps but none are generated, the texture will be incomplete",
                opts.min_filter
            );
        }

        let id = gl.create_texture();
        if id == 0 {
            return Err(RenderError::Create(String::from("texture")));
        }

        gl.bind_texture(id);

        gl.texture_parameter(gl::TEXTURE_WRAP_S, opts.wrap_s.gl_enum() as GLint);
        gl.texture_parameter(gl::TEXTURE_WRAP_T, opts.wrap_t.gl_enum() as GLint);
        gl.texture_parameter(gl::TEXTURE_MIN_FILTER, opts.min_filter.gl_enum() as GLint);
        gl.texture_parameter(gl::TEXTURE_MAG_FILTER, opts.mag_filter.gl_enum() as GLint);

        let (width, height) = img.dimensions();
        gl.texture_image_rgba(width as GLsizei, height as GLsizei, img.as_raw());

        if opts.gen_mipmap {
            gl.generate_mipmap();
        }

        debug!("uploaded texture: id = {}, {}x{}", id, width, height);
        Ok(Texture { id })
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Binds this texture to `unit` for the next draw.
    pub fn bind<D: Driver>(&self, gl: &D, unit: TextureUnit) {
        gl.active_texture(unit.binding());
        gl.bind_texture(self.id);
    }

    pub fn delete<D: Driver>(self, gl: &D) {
        gl.delete_texture(self.id);
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use std::io::Write;

    use image::Rgba;

    use super::*;
    use crate::driver::fake::FakeGl;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, (x * y) as u8, 255]))
    }

    #[test]
    fn wrap_modes_map_one_to_one() {
        let constants: HashSet<GLenum> = TextureWrap::ALL.iter().map(|w| w.gl_enum()).collect();

        assert_eq!(constants.len(), TextureWrap::ALL.len());
        assert_eq!(TextureWrap::ClampToEdge.gl_enum(), gl::CLAMP_TO_EDGE);
        assert_eq!(TextureWrap::MirroredRepeat.gl_enum(), gl::MIRRORED_REPEAT);
    }

    #[test]
    fn filters_map_one_to_one() {
        let constants: HashSet<GLenum> = TextureFilter::ALL.iter().map(|f| f.gl_enum()).collect();

        assert_eq!(constants.len(), TextureFilter::ALL.len());
        assert_eq!(TextureFilter::LinearMipmapLinear.gl_enum(), gl::LINEAR_MIPMAP_LINEAR);
        assert_eq!(
            TextureFilter::NearestMipmapLinear.gl_enum(),
            gl::NEAREST_MIPMAP_LINEAR
        );
    }

    #[test]
    fn only_mipmap_filters_use_mipmaps() {
        let with: Vec<_> = TextureFilter::ALL
            .iter()
            .filter(|f| f.uses_mipmaps())
            .collect();

        assert_eq!(with.len(), 4);
        assert!(!TextureFilter::Nearest.uses_mipmaps());
        assert!(!TextureFilter::Linear.uses_mipmaps());
    }

    #[test]
    fn texture_units_cover_sixteen_slots() {
        assert_eq!(TextureUnit::UNIT0.binding(), gl::TEXTURE0);
        assert_eq!(TextureUnit::UNIT1.index(), 1);
        assert_eq!(TextureUnit::new(15).map(TextureUnit::binding), Some(gl::TEXTURE15));
        assert_eq!(TextureUnit::new(16), None);
    }

    #[test]
    fn flipping_twice_restores_the_image() {
        for &(w, h) in &[(4, 4), (3, 5), (1, 1), (7, 2)] {
            let original = gradient(w, h);
            let mut img = original.clone();

            imageops::flip_vertical_in_place(&mut img);
            if h > 1 {
                assert_ne!(img, original);
            }

            imageops::flip_vertical_in_place(&mut img);
            assert_eq!(img, original);
        }
    }

    #[test]
    fn decode_flips_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        let original = gradient(3, 5);
        original.save(&path).unwrap();

        let straight = decode(&path, &TextureOpts::default()).unwrap();
        let flipped = decode(
            &path,
            &TextureOpts {
                flip_y: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(straight, original);
        assert_eq!(flipped.get_pixel(1, 0), original.get_pixel(1, 4));
        assert_eq!(flipped.get_pixel(2, 4), original.get_pixel(2, 0));
    }

    #[test]
    fn decode_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode(dir.path().join("nope.png"), &TextureOpts::default()).unwrap_err();

        assert!(matches!(err, RenderError::Io { .. }));
    }

    #[test]
    fn decode_garbage_is_a_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not an image").unwrap();

        let err = decode(file.path(), &TextureOpts::default()).unwrap_err();
        assert!(matches!(err, RenderError::Decode { .. }));
    }

    #[test]
    fn packed_rows_pass_the_stride_check() {
        assert!(check_stride(&gradient(5, 3)).is_ok());
        assert!(check_stride(&RgbaImage::new(0, 0)).is_ok());
    }

    #[test]
    fn padded_rows_are_rejected_before_touching_the_driver() {
        // two rows of 2 pixels, each padded out to 10 bytes
        let img = RgbaImage::from_raw(2, 2, vec![0u8; 20]).unwrap();

        assert!(matches!(
            check_stride(&img),
            Err(RenderError::UnsupportedStride {
                width: 2,
                stride: 10
            })
        ));

        let gl = FakeGl::new();
        let err = Texture::upload(&gl, &img, TextureOpts::default()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::UnsupportedStride {
                width: 2,
                stride: 10
            }
        ));

        let state = gl.state.borrow();
        assert!(state.created_textures.is_empty());
        assert!(state.bindings.is_empty());
        assert!(state.parameters.is_empty());
        assert!(state.images.is_empty());
    }

    #[test]
    fn upload_passes_options_to_the_driver() {
        let gl = FakeGl::new();
        let img = gradient(2, 2);
        let opts = TextureOpts {
            gen_mipmap: false,
            wrap_s: TextureWrap::ClampToEdge,
            wrap_t: TextureWrap::MirroredRepeat,
            min_filter: TextureFilter::Nearest,
            mag_filter: TextureFilter::Linear,
            flip_y: false,
        };

        let texture = Texture::upload(&gl, &img, opts).unwrap();

        let state = gl.state.borrow();
        assert_eq!(state.bindings, vec![(0, texture.id())]);
        assert_eq!(
            state.parameters,
            vec![
                (gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as GLint),
                (gl::TEXTURE_WRAP_T, gl::MIRRORED_REPEAT as GLint),
                (gl::TEXTURE_MIN_FILTER, gl::NEAREST as GLint),
                (gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint),
            ]
        );
        assert_eq!(state.images, vec![(2, 2, img.as_raw().clone())]);
        assert_eq!(state.mipmaps, 0);
    }

    #[test]
    fn mipmaps_are_generated_when_asked() {
        let gl = FakeGl::new();
        Texture::upload(&gl, &gradient(4, 4), TextureOpts::default()).unwrap();

        assert_eq!(gl.state.borrow().mipmaps, 1);
    }

    #[test]
    fn read_decodes_and_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.png");
        gradient(4, 2).save(&path).unwrap();

        let gl = FakeGl::new();
        Texture::read(&gl, &path, TextureOpts::default()).unwrap();

        let state = gl.state.borrow();
        assert_eq!(state.images.len(), 1);
        assert_eq!((state.images[0].0, state.images[0].1), (4, 2));
        assert_eq!(state.images[0].2.len(), 4 * 2 * 4);
    }

    #[test]
    fn bind_activates_the_unit_first() {
        let gl = FakeGl::new();
        let texture = Texture::upload(&gl, &gradient(1, 1), TextureOpts::default()).unwrap();

        texture.bind(&gl, TextureUnit::UNIT1);
        assert_eq!(
            gl.state.borrow().bindings.last(),
            Some(&(gl::TEXTURE1, texture.id()))
        );
    }

    #[test]
    fn zero_id_is_a_create_error() {
        let gl = FakeGl::refusing_objects();
        let err = Texture::upload(&gl, &gradient(1, 1), TextureOpts::default()).unwrap_err();

        assert!(matches!(err, RenderError::Create(_)));
    }
}

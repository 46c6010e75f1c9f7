//! Image-backed textures sampled by (u, v) surface coordinates.

use std::path::Path;

use glint_math::Vec3;
use thiserror::Error;

use crate::Color;

/// Errors that can occur while loading a texture.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("failed to load texture: {0}")]
    Load(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A decoded texture: RGB floats in [0, 1], row-major, row 0 at the top.
#[derive(Clone, Debug)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Vec3>,
}

impl Texture {
    /// Create a texture from raw pixel rows.
    pub fn new(width: u32, height: u32, pixels: Vec<Vec3>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A 1x1 texture of a single color.
    pub fn solid_color(color: Color) -> Self {
        Self::new(1, 1, vec![color])
    }

    /// Decode a texture from an image file.
    pub fn load(path: impl AsRef<Path>) -> TextureResult<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| TextureError::Load(format!("{}: {}", path.display(), e)))?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb
            .pixels()
            .map(|p| Vec3::new(p[0] as f32, p[1] as f32, p[2] as f32) / 255.0)
            .collect();

        log::debug!("loaded texture {} ({}x{})", path.display(), width, height);
        Ok(Self::new(width, height, pixels))
    }

    /// Sample the texel at (u, v).
    ///
    /// Coordinates wrap, so values outside [0, 1] tile the texture.
    /// v = 0 is the bottom of the image.
    pub fn sample_uv(&self, u: f32, v: f32) -> Color {
        let u = u.rem_euclid(1.0);
        let v = v.rem_euclid(1.0);

        let x = (u * self.width as f32) as u32;
        let y = ((1.0 - v) * self.height as f32) as u32;
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);

        self.pixels[(y * self.width + x) as usize]
    }
}

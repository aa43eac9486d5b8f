extern crate alloc;
use alloc::vec::Vec;

use crate::error::HistogramError;

/// Pack RGBA channels into a single color key: red in the low byte, then
/// green, blue, and alpha in the high byte.
#[inline]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32
}

/// Inverse of [`pack_rgba`].
#[inline]
pub const fn unpack_rgba(color: u32) -> rgb::RGBA<u8> {
    rgb::RGBA {
        r: color as u8,
        g: (color >> 8) as u8,
        b: (color >> 16) as u8,
        a: (color >> 24) as u8,
    }
}

/// A row-major image of packed colors.
pub trait PixelSource {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Number of pixels, normally `width * height`.
    fn len(&self) -> usize;

    /// Packed color of the pixel at linear `index` (`y * width + x`).
    fn color(&self, index: usize) -> u32;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owned pixel buffer of packed colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    colors: Vec<u32>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wrap already-packed colors. Zero-sized images are allowed.
    pub fn from_packed(
        colors: Vec<u32>,
        width: usize,
        height: usize,
    ) -> Result<Self, HistogramError> {
        check_dimensions(colors.len(), width, height)?;
        Ok(Self {
            colors,
            width,
            height,
        })
    }

    pub fn from_rgba(
        pixels: &[rgb::RGBA<u8>],
        width: usize,
        height: usize,
    ) -> Result<Self, HistogramError> {
        check_dimensions(pixels.len(), width, height)?;
        let colors = pixels
            .iter()
            .map(|p| pack_rgba(p.r, p.g, p.b, p.a))
            .collect();
        Ok(Self {
            colors,
            width,
            height,
        })
    }

    /// RGB pixels are packed as fully opaque.
    pub fn from_rgb(
        pixels: &[rgb::RGB<u8>],
        width: usize,
        height: usize,
    ) -> Result<Self, HistogramError> {
        check_dimensions(pixels.len(), width, height)?;
        let colors = pixels
            .iter()
            .map(|p| pack_rgba(p.r, p.g, p.b, 255))
            .collect();
        Ok(Self {
            colors,
            width,
            height,
        })
    }

    pub fn colors(&self) -> &[u32] {
        &self.colors
    }
}

impl PixelSource for PixelBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn len(&self) -> usize {
        self.colors.len()
    }

    fn color(&self, index: usize) -> u32 {
        self.colors[index]
    }
}

#[cfg(feature = "imgref")]
impl PixelSource for imgref::ImgRef<'_, rgb::RGBA<u8>> {
    fn width(&self) -> usize {
        imgref::Img::width(self)
    }

    fn height(&self) -> usize {
        imgref::Img::height(self)
    }

    fn len(&self) -> usize {
        imgref::Img::width(self) * imgref::Img::height(self)
    }

    fn color(&self, index: usize) -> u32 {
        let width = imgref::Img::width(self);
        let (y, x) = (index / width, index % width);
        let p = self.buf()[y * self.stride() + x];
        pack_rgba(p.r, p.g, p.b, p.a)
    }
}

fn check_dimensions(len: usize, width: usize, height: usize) -> Result<(), HistogramError> {
    if width.checked_mul(height) != Some(len) {
        return Err(HistogramError::DimensionMismatch { len, width, height });
    }
    Ok(())
}

//! Shared preprocessing for the hash algorithms: grayscale, then resize to a
//! small fixed grid with a Lanczos filter.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

use crate::error::{Error, Result};

/// Lanczos (a = 3) keeps aliasing low, so small rescales of the source image
/// do not flip bits in the fingerprint.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Reduce a pixel's colour channels to one comparable value (0..=765).
///
/// After grayscale conversion R, G and B are equal, so the sum is monotonic in
/// brightness.
#[inline]
pub fn sum_channels(r: u8, g: u8, b: u8) -> u16 {
    r as u16 + g as u16 + b as u16
}

/// A freshly produced low-resolution grayscale grid, owned by one hash call
#[derive(Debug, Clone)]
pub struct NormalizedGrid {
    pixels: RgbImage,
}

impl NormalizedGrid {
    /// Grayscale `img` and resize it to exactly `width` x `height`.
    ///
    /// Fails with [`Error::NilImage`] if `img` has no pixels; nothing is
    /// processed in that case.
    pub fn new(img: &DynamicImage, width: u32, height: u32) -> Result<Self> {
        let (src_width, src_height) = img.dimensions();
        if src_width == 0 || src_height == 0 {
            return Err(Error::NilImage);
        }

        let pixels = img
            .grayscale()
            .resize_exact(width, height, RESIZE_FILTER)
            .to_rgb8();

        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Reduced value of the cell at column `x`, row `y`; (0, 0) is top-left.
    #[inline]
    pub fn reduced(&self, x: u32, y: u32) -> u16 {
        let Rgb([r, g, b]) = *self.pixels.get_pixel(x, y);
        sum_channels(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    #[test]
    fn test_sum_channels_range() {
        assert_eq!(sum_channels(0, 0, 0), 0);
        assert_eq!(sum_channels(255, 255, 255), 765);
        assert_eq!(sum_channels(1, 2, 3), 6);
    }

    #[test]
    fn test_grid_has_requested_dimensions() {
        let img = DynamicImage::ImageRgba8(ImageBuffer::from_fn(37, 23, |x, y| {
            Rgba([(x * 7) as u8, (y * 11) as u8, 90, 255])
        }));

        let grid = NormalizedGrid::new(&img, 9, 8).unwrap();
        assert_eq!((grid.width(), grid.height()), (9, 8));

        let grid = NormalizedGrid::new(&img, 8, 8).unwrap();
        assert_eq!((grid.width(), grid.height()), (8, 8));
    }

    #[test]
    fn test_grid_is_gray() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_fn(16, 16, |x, _| {
            Rgb([200, (x * 10) as u8, 30])
        }));
        let grid = NormalizedGrid::new(&img, 8, 8).unwrap();

        for Rgb([r, g, b]) in grid.pixels.pixels() {
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn test_empty_image_is_nil() {
        let img = DynamicImage::new_rgb8(0, 0);
        assert!(matches!(
            NormalizedGrid::new(&img, 8, 8),
            Err(Error::NilImage)
        ));

        let img = DynamicImage::new_rgb8(12, 0);
        assert!(matches!(
            NormalizedGrid::new(&img, 8, 8),
            Err(Error::NilImage)
        ));
    }
}

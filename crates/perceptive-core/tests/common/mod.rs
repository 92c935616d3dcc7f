//! Synthetic images for integration tests.
#![allow(dead_code)]

use image::{DynamicImage, ImageBuffer, Rgb};
use std::path::PathBuf;

/// Path of a fixture under `tests/data`
pub fn get_test_data_path(filename: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .join("tests")
        .join("data")
        .join(filename)
}

/// A smooth colour scene with channels kept well inside 0..=255, so a tint
/// never clips.
pub fn scene(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
        let r = 40 + x * 150 / width;
        let g = 40 + y * 150 / height;
        let b = 40 + (x + y) * 75 / (width + height);
        Rgb([r as u8, g as u8, b as u8])
    }))
}

/// Shift the colour balance of `img` towards pink
pub fn tinted(img: &DynamicImage) -> DynamicImage {
    let mut rgb = img.to_rgb8();
    for Rgb([r, _, b]) in rgb.pixels_mut() {
        *r = r.saturating_add(40);
        *b = b.saturating_add(25);
    }
    DynamicImage::ImageRgb8(rgb)
}

/// White top half, black bottom half
pub fn split_horizontal(size: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(size, size, |_, y| {
        if y < size / 2 {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    }))
}

/// White left half, black right half
pub fn split_vertical(size: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(size, size, |x, _| {
        if x < size / 2 {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    }))
}

/// Brightness-inverted copy of `img`
pub fn negative(img: &DynamicImage) -> DynamicImage {
    let mut inverted = img.clone();
    inverted.invert();
    inverted
}

/// Top half darkens left to right, bottom half is flat black
pub fn gradient_top_half(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
        if y < height / 2 {
            let v = (255 - x * 255 / (width - 1)) as u8;
            Rgb([v, v, v])
        } else {
            Rgb([0, 0, 0])
        }
    }))
}

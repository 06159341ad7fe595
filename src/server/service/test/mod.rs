use image::{DynamicImage, RgbImage};

mod book;
mod highlight;
mod shelf;

/// Blank in-memory image of the given size.
fn blank_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
}

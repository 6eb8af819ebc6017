use std::io::Cursor;

use crate::utils::ExtractionError;
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use imageproc::contrast::threshold;
use log::debug;

/// Prepares uploaded images for the recognizer.
pub struct ImageProcessor;

impl ImageProcessor {
    pub fn decode(image_bytes: &[u8]) -> Result<DynamicImage, ExtractionError> {
        let img = image::load_from_memory(image_bytes)
            .map_err(|e| ExtractionError::Decode(format!("Failed to load image: {}", e)))?;
        debug!("Decoded {}x{} image", img.width(), img.height());
        Ok(img)
    }

    /// Whole-document preprocessing: luminance, then a fixed threshold.
    /// Pixels below `cutoff` turn black, everything else white.
    pub fn binarize(img: &DynamicImage, cutoff: u8) -> GrayImage {
        let gray = img.to_luma8();
        if cutoff == 0 {
            let (width, height) = gray.dimensions();
            return GrayImage::from_pixel(width, height, Luma([255u8]));
        }
        // threshold() blackens pixels <= its argument
        threshold(&gray, cutoff - 1)
    }

    /// Region preprocessing: resize to the canonical geometry, ignoring the
    /// original aspect ratio, then convert to luminance.
    pub fn canonicalize(img: &DynamicImage, width: u32, height: u32) -> GrayImage {
        img.resize_exact(width, height, FilterType::Triangle).to_luma8()
    }

    pub fn encode_png(img: &GrayImage) -> Result<Vec<u8>, image::ImageError> {
        let mut buffer = Vec::with_capacity(img.as_raw().len() / 2);
        DynamicImage::ImageLuma8(img.clone()).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, _| {
            let v = (x * 255 / (width - 1)) as u8;
            Rgb([v, v, v])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = ImageProcessor::decode(b"definitely not an image");
        assert!(matches!(result, Err(ExtractionError::Decode(_))));
    }

    #[test]
    fn test_decode_png_roundtrip() {
        let gray = GrayImage::from_pixel(4, 3, Luma([90u8]));
        let png = ImageProcessor::encode_png(&gray).unwrap();
        let decoded = ImageProcessor::decode(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }

    #[test]
    fn test_binarize_fixed_threshold() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_fn(3, 1, |x, _| {
            Luma([[127u8, 128, 200][x as usize]])
        }));
        let out = ImageProcessor::binarize(&img, 128);
        assert_eq!(out.get_pixel(0, 0)[0], 0);
        assert_eq!(out.get_pixel(1, 0)[0], 255);
        assert_eq!(out.get_pixel(2, 0)[0], 255);
    }

    #[test]
    fn test_binarize_output_is_two_level() {
        let out = ImageProcessor::binarize(&gradient(64, 4), 128);
        assert!(out.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }

    #[test]
    fn test_canonicalize_any_aspect_ratio() {
        for (w, h) in [(1600, 1000), (300, 900), (515, 321)] {
            let out = ImageProcessor::canonicalize(&gradient(w, h), 515, 321);
            assert_eq!(out.dimensions(), (515, 321));
        }
    }
}

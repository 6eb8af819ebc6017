use image::imageops::crop_imm;
use image::GrayImage;

use crate::models::Region;

/// Pixel rectangle `[x1, x2) x [y1, y2)` inside a canonical image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl PixelBounds {
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }
}

pub struct RegionSegmenter;

impl RegionSegmenter {
    /// Converts fractional coordinates to pixel offsets by truncation.
    ///
    /// # Panics
    ///
    /// Panics if `region` violates its invariant. Region tables are
    /// validated when the config is loaded, so reaching this is a bug.
    pub fn pixel_bounds(region: &Region, width: u32, height: u32) -> PixelBounds {
        assert!(
            region.is_well_formed(),
            "malformed region {}: {:?}",
            region.field.name(),
            region
        );
        let scale = |fraction: f32, extent: u32| ((fraction * extent as f32) as u32).min(extent);
        PixelBounds {
            x1: scale(region.x_start, width),
            y1: scale(region.y_start, height),
            x2: scale(region.x_end, width),
            y2: scale(region.y_end, height),
        }
    }

    pub fn crop(image: &GrayImage, region: &Region) -> GrayImage {
        let (width, height) = image.dimensions();
        let bounds = Self::pixel_bounds(region, width, height);
        crop_imm(image, bounds.x1, bounds.y1, bounds.width(), bounds.height()).to_image()
    }
}

use image::{GrayImage, Luma};

use crate::models::roi::Roi;

/// Capability for marking scanned regions on a diagnostic image.
///
/// Presentation-only hook: the extractor reports each slot region it scanned,
/// and implementations decide how to render that. Annotation never affects
/// the recognition result.
pub trait RegionAnnotator {
    fn annotate(&mut self, region: &Roi);
}

/// Draws rectangle outlines onto an owned copy of the binarized screenshot.
///
/// Useful for eyeballing ROI placement when tuning table entries for a new
/// resolution; the caller saves or displays the finished image.
pub struct OutlineAnnotator {
    image: GrayImage,
    thickness: u32,
}

const OUTLINE_VALUE: u8 = 255;

impl OutlineAnnotator {
    pub fn new(image: GrayImage) -> Self {
        Self {
            image,
            thickness: 2,
        }
    }

    /// Consume the annotator and return the marked-up image.
    pub fn into_image(self) -> GrayImage {
        self.image
    }

    fn draw_pixel(&mut self, x: u32, y: u32) {
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, Luma([OUTLINE_VALUE]));
        }
    }
}

impl RegionAnnotator for OutlineAnnotator {
    fn annotate(&mut self, region: &Roi) {
        if !region.is_valid() {
            return;
        }
        for t in 0..self.thickness {
            // Horizontal edges
            for x in region.x..region.x2() {
                self.draw_pixel(x, region.y + t);
                self.draw_pixel(x, region.y2().saturating_sub(1 + t));
            }
            // Vertical edges
            for y in region.y..region.y2() {
                self.draw_pixel(region.x + t, y);
                self.draw_pixel(region.x2().saturating_sub(1 + t), y);
            }
        }
    }
}

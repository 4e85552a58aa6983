use image::{imageops, GrayImage};

use crate::models::roi::{HeightBand, Roi, WidthWindow};
use crate::services::identify::NUM_SHOP_SLOTS;

/// Walks the five evenly-spaced champion name regions across the shop panel.
///
/// All slots share one height band; each slot's horizontal window is the
/// first slot's window shifted right by `slot * interval`.
#[derive(Debug, Clone, Copy)]
pub struct ShopScanner {
    band: HeightBand,
    window: WidthWindow,
}

impl ShopScanner {
    pub fn new(band: HeightBand, window: WidthWindow) -> Self {
        Self { band, window }
    }

    /// Region of one shop slot, in absolute screenshot coordinates.
    pub fn region(&self, slot: u32) -> Roi {
        Roi::from_bounds(
            self.window.slot_left(slot),
            self.band.top,
            self.window.slot_right(slot),
            self.band.bottom,
        )
    }

    /// The five slot regions in left-to-right display order.
    pub fn regions(&self) -> impl Iterator<Item = Roi> + '_ {
        (0..NUM_SHOP_SLOTS as u32).map(|slot| self.region(slot))
    }

    /// Crop the five slot regions out of the binarized screenshot.
    ///
    /// Coordinates are clamped to the image bounds, so geometry reaching past
    /// the edge degrades to a zero-area crop instead of panicking. The source
    /// image is read-only; each crop is an owned copy.
    pub fn crops(&self, image: &GrayImage) -> Vec<(Roi, GrayImage)> {
        self.regions()
            .map(|roi| (roi, crop_clamped(image, &roi)))
            .collect()
    }
}

/// Crop `roi` out of `image`, clamping to the image bounds.
fn crop_clamped(image: &GrayImage, roi: &Roi) -> GrayImage {
    let (w, h) = image.dimensions();

    let x0 = roi.x.min(w);
    let y0 = roi.y.min(h);
    let cw = roi.width.min(w - x0);
    let ch = roi.height.min(h - y0);

    imageops::crop_imm(image, x0, y0, cw, ch).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn scanner_1680x1001() -> ShopScanner {
        ShopScanner::new(HeightBand::new(965, 991), WidthWindow::new(398, 535, 186))
    }

    #[test]
    fn test_five_regions_in_display_order() {
        let regions: Vec<Roi> = scanner_1680x1001().regions().collect();
        assert_eq!(regions.len(), 5);

        let lefts: Vec<u32> = regions.iter().map(|r| r.x).collect();
        assert_eq!(lefts, vec![398, 584, 770, 956, 1142]);
    }

    #[test]
    fn test_slot_x_origins_strictly_increase() {
        let regions: Vec<Roi> = scanner_1680x1001().regions().collect();
        for pair in regions.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn test_regions_share_band_and_size() {
        for roi in scanner_1680x1001().regions() {
            assert_eq!(roi.y, 965);
            assert_eq!(roi.height, 26);
            assert_eq!(roi.width, 137);
        }
    }

    #[test]
    fn test_region_geometry_is_deterministic() {
        let scanner = scanner_1680x1001();
        let first: Vec<Roi> = scanner.regions().collect();
        let second: Vec<Roi> = scanner.regions().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_crops_match_region_sizes() {
        let image = GrayImage::new(1680, 1001);
        let crops = scanner_1680x1001().crops(&image);
        assert_eq!(crops.len(), 5);
        for (roi, crop) in &crops {
            assert_eq!(crop.dimensions(), (roi.width, roi.height));
        }
    }

    #[test]
    fn test_crop_reads_expected_pixels() {
        // Mark the top-left pixel of slot 2's region
        let mut image = GrayImage::new(1680, 1001);
        image.put_pixel(770, 965, Luma([255u8]));

        let crops = scanner_1680x1001().crops(&image);
        assert_eq!(crops[2].1.get_pixel(0, 0)[0], 255);
        assert_eq!(crops[1].1.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_out_of_range_geometry_clamps_to_zero_area() {
        // Geometry far beyond a small image degrades instead of panicking
        let image = GrayImage::new(100, 100);
        let crops = scanner_1680x1001().crops(&image);
        assert_eq!(crops.len(), 5);
        for (_, crop) in &crops {
            assert_eq!(crop.dimensions(), (0, 0));
        }
    }

    #[test]
    fn test_partially_out_of_range_crop_clamps() {
        let scanner = ShopScanner::new(HeightBand::new(90, 110), WidthWindow::new(90, 120, 50));
        let image = GrayImage::new(100, 100);
        let crops = scanner.crops(&image);
        // Slot 0 clips to the 10x10 corner that exists
        assert_eq!(crops[0].1.dimensions(), (10, 10));
        // Later slots start past the right edge entirely
        assert_eq!(crops[1].1.dimensions(), (0, 0));
    }
}

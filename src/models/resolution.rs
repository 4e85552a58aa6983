use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a source screenshot.
///
/// Used as an exact lookup key into the ROI table; resolutions are never
/// interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Derive the resolution from a decoded screenshot.
    pub fn of_image(image: &DynamicImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    #[test]
    fn test_of_image() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(1680, 1001));
        assert_eq!(Resolution::of_image(&img), Resolution::new(1680, 1001));
    }

    #[test]
    fn test_display() {
        assert_eq!(Resolution::new(1280, 720).to_string(), "1280x720");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let res = Resolution::new(1904, 1001);
        let json = serde_json::to_string(&res).unwrap();
        let back: Resolution = serde_json::from_str(&json).unwrap();
        assert_eq!(res, back);
    }
}

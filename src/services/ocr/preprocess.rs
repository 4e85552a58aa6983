use image::{DynamicImage, GrayImage, ImageBuffer, Luma};

/// Intensity cutoff separating name text from the shop panel backdrop.
///
/// Tuned for light-colored text on the darker panel; fixed, not configurable.
pub const BINARY_THRESHOLD: u8 = 150;

/// Convert a decoded screenshot into a binarized image for text recognition.
///
/// Grayscale via the standard luminance-weighted reduction, then inverted
/// fixed thresholding: intensity below [`BINARY_THRESHOLD`] becomes
/// foreground (255), everything else background (0). Output dimensions equal
/// input dimensions. Always succeeds for well-formed input; zero-sized images
/// are rejected by the caller before this point.
pub fn binarize(image: &DynamicImage) -> GrayImage {
    let gray = image.to_luma8();

    ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] < BINARY_THRESHOLD {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

use image::DynamicImage;

/// OCR engine abstraction - the text recognition backend is an external
/// collaborator consumed through this seam.
pub trait OcrEngine: Send + Sync {
    /// Recognize text from an image region.
    ///
    /// A blank or zero-area region yields `Ok` with an empty string rather
    /// than an error; errors are reserved for backend failures.
    fn recognize(&self, image: &DynamicImage) -> Result<String, String>;
}

impl<T: OcrEngine + ?Sized> OcrEngine for &T {
    fn recognize(&self, image: &DynamicImage) -> Result<String, String> {
        (**self).recognize(image)
    }
}

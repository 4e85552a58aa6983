use crate::models::resolution::Resolution;

/// Errors surfaced by the identification pipeline.
///
/// Per-slot recognition failures are not represented here: a failing slot
/// degrades to an empty string so the five-slot result shape is preserved.
#[derive(Debug, thiserror::Error)]
pub enum IdentifyError {
    /// The screenshot file could not be read or decoded.
    #[error("failed to decode screenshot: {0}")]
    MalformedImage(#[from] image::ImageError),

    /// The decoded screenshot has zero width or height.
    #[error("screenshot has zero width or height")]
    EmptyImage,

    /// The screenshot resolution has no entry in the ROI table.
    ///
    /// Lookups never extrapolate; an unknown resolution fails the whole call
    /// rather than producing degenerate crop geometry.
    #[error("no shop ROI mapping for resolution {0}")]
    UnmappedResolution(Resolution),
}

use std::path::Path;

use image::DynamicImage;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::IdentifyError;
use crate::models::resolution::Resolution;
use crate::services::annotate::RegionAnnotator;
use crate::services::ocr::preprocess::binarize;
use crate::services::ocr::OcrEngine;
use crate::services::roi_table::RoiTable;
use crate::services::scanner::ShopScanner;

/// Number of purchasable slots in the shop panel.
pub const NUM_SHOP_SLOTS: usize = 5;

/// Reads the five champion names out of a shop screenshot.
///
/// Owns the recognition engine and the resolution ROI table; one reader can
/// serve any number of screenshots.
pub struct ShopReader<E> {
    engine: E,
    table: RoiTable,
}

impl<E: OcrEngine> ShopReader<E> {
    /// Reader backed by the built-in curated ROI table.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            table: RoiTable::builtin().clone(),
        }
    }

    /// Reader with a table override (e.g. loaded via [`RoiTable::from_json`]).
    pub fn with_table(engine: E, table: RoiTable) -> Self {
        Self { engine, table }
    }

    /// Identify the five shop champions in a screenshot file.
    pub fn identify_path(&self, path: impl AsRef<Path>) -> Result<Vec<String>, IdentifyError> {
        let image = image::open(path.as_ref())?;
        self.identify(&image)
    }

    /// Identify the five shop champions in a decoded screenshot.
    ///
    /// Returns exactly [`NUM_SHOP_SLOTS`] strings in left-to-right slot
    /// order. A slot whose recognition fails degrades to an empty string;
    /// slot cardinality and ordering never vary with recognition quality.
    pub fn identify(&self, image: &DynamicImage) -> Result<Vec<String>, IdentifyError> {
        self.run(image, None)
    }

    /// Same pipeline, additionally reporting each scanned region to a
    /// diagnostic annotator. Annotation does not affect the returned names.
    pub fn identify_annotated(
        &self,
        image: &DynamicImage,
        annotator: &mut dyn RegionAnnotator,
    ) -> Result<Vec<String>, IdentifyError> {
        self.run(image, Some(annotator))
    }

    fn run(
        &self,
        image: &DynamicImage,
        annotator: Option<&mut dyn RegionAnnotator>,
    ) -> Result<Vec<String>, IdentifyError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(IdentifyError::EmptyImage);
        }

        let resolution = Resolution::of_image(image);
        let band = self
            .table
            .height_band_for(resolution)
            .ok_or(IdentifyError::UnmappedResolution(resolution))?;
        let window = self
            .table
            .width_window_for(resolution)
            .ok_or(IdentifyError::UnmappedResolution(resolution))?;

        debug!(%resolution, ?band, ?window, "resolved shop ROI geometry");

        let binarized = binarize(image);
        let scanner = ShopScanner::new(band, window);
        let crops = scanner.crops(&binarized);

        if let Some(annotator) = annotator {
            for (roi, _) in &crops {
                annotator.annotate(roi);
            }
        }

        // Slots are independent; recognize in parallel and rejoin in slot
        // order (indexed collect).
        let names: Vec<String> = crops
            .into_par_iter()
            .enumerate()
            .map(|(slot, (roi, crop))| {
                let region = DynamicImage::ImageLuma8(crop);
                match self.engine.recognize(&region) {
                    Ok(text) => text.trim().to_string(),
                    Err(e) => {
                        warn!(slot, ?roi, error = %e, "recognition failed, slot degrades to empty");
                        String::new()
                    }
                }
            })
            .collect();

        debug_assert_eq!(names.len(), NUM_SHOP_SLOTS);
        debug!(?names, "identified shop champions");
        Ok(names)
    }
}

/// Identify the five champions in the shop of the screenshot at `image_path`.
///
/// Convenience entry point over [`ShopReader`] with the built-in ROI table.
/// Slot 0 is the leftmost champion, slot 4 the rightmost.
pub fn identify_shop_champions<E: OcrEngine>(
    image_path: impl AsRef<Path>,
    engine: &E,
) -> Result<Vec<String>, IdentifyError> {
    ShopReader::new(engine).identify_path(image_path)
}

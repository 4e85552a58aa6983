//! Identifies the five champions offered in the shop panel of a TFT
//! screenshot.
//!
//! The pipeline is resolution-adaptive: a curated table maps the exact
//! screenshot resolution to the pixel regions holding the five champion name
//! labels. The screenshot is binarized once, the five regions are cropped in
//! left-to-right slot order, and each crop is handed to an [`OcrEngine`]
//! implementation. The result is always exactly five strings, slot 0
//! (leftmost) through slot 4 (rightmost).

pub mod error;
pub mod models;
pub mod services;

pub use error::IdentifyError;
pub use models::resolution::Resolution;
pub use models::roi::{HeightBand, Roi, WidthWindow};
pub use services::annotate::{OutlineAnnotator, RegionAnnotator};
pub use services::identify::{identify_shop_champions, ShopReader, NUM_SHOP_SLOTS};
pub use services::ocr::{HttpOcrClient, OcrEngine};
pub use services::roi_table::{RoiTable, RoiTableEntry};

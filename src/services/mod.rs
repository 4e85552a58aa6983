pub mod annotate;
pub mod identify;
pub mod ocr;
pub mod roi_table;
pub mod scanner;

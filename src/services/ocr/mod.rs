pub mod engine;
pub mod http;
pub mod preprocess;

pub use engine::OcrEngine;
pub use http::HttpOcrClient;

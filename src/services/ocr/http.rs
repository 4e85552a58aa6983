use base64::{engine::general_purpose, Engine as _};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use super::engine::OcrEngine;

/// OCR client that sends image regions to a local recognition sidecar.
///
/// The sidecar exposes `POST /ocr` taking a base64 PNG and returning detected
/// text boxes with corner coordinates. Boxes are reassembled left-to-right so
/// multi-word names keep their on-screen reading order.
#[derive(Clone)]
pub struct HttpOcrClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:39835";

#[derive(Serialize)]
struct ImageRequest {
    image_base64: String,
}

/// Single text box with bounding box coordinates
#[derive(Deserialize, Clone, Debug)]
struct TextBox {
    #[serde(rename = "box")]
    bbox: Vec<Vec<f64>>, // 4 corner points [[x1,y1], [x2,y2], [x3,y3], [x4,y4]]
    text: String,
}

#[derive(Deserialize)]
struct OcrResponse {
    boxes: Vec<TextBox>,
}

impl TextBox {
    /// Leftmost x-coordinate, for left-to-right sorting.
    fn left_x(&self) -> f64 {
        self.bbox
            .iter()
            .map(|p| p[0])
            .fold(f64::INFINITY, f64::min)
    }
}

impl HttpOcrClient {
    /// Create a client against the default sidecar address.
    pub fn new() -> Result<Self, String> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Check if the sidecar is up.
    pub fn health_check(&self) -> Result<(), String> {
        let url = format!("{}/health", self.base_url);
        self.client
            .get(&url)
            .send()
            .map_err(|e| format!("Health check failed: {}", e))?;
        Ok(())
    }

    /// Encode image to base64 PNG
    fn encode_image(image: &DynamicImage) -> Result<String, String> {
        let mut buffer = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .map_err(|e| format!("Failed to encode image: {}", e))?;
        Ok(general_purpose::STANDARD.encode(&buffer))
    }

    /// Sort boxes left-to-right and join their text with single spaces.
    fn assemble_text(mut boxes: Vec<TextBox>) -> String {
        boxes.sort_by(|a, b| {
            a.left_x()
                .partial_cmp(&b.left_x())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        boxes
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl OcrEngine for HttpOcrClient {
    fn recognize(&self, image: &DynamicImage) -> Result<String, String> {
        // Nothing to recognize in a zero-area crop; skip the round trip
        if image.width() == 0 || image.height() == 0 {
            return Ok(String::new());
        }

        let image_base64 = Self::encode_image(image)?;
        let url = format!("{}/ocr", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ImageRequest { image_base64 })
            .send()
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("OCR server error: {}", error_text));
        }

        let data: OcrResponse = response
            .json()
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(Self::assemble_text(data.boxes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    fn make_box(left: f64, text: &str) -> TextBox {
        TextBox {
            bbox: vec![
                vec![left, 0.0],
                vec![left + 40.0, 0.0],
                vec![left + 40.0, 20.0],
                vec![left, 20.0],
            ],
            text: text.to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        assert!(HttpOcrClient::new().is_ok());
    }

    #[test]
    fn test_left_x_uses_minimum_corner() {
        let b = make_box(12.5, "x");
        assert_eq!(b.left_x(), 12.5);
    }

    #[test]
    fn test_assemble_text_sorts_left_to_right() {
        let boxes = vec![make_box(90.0, "Zix"), make_box(10.0, "Kha")];
        assert_eq!(HttpOcrClient::assemble_text(boxes), "Kha Zix");
    }

    #[test]
    fn test_assemble_text_empty() {
        assert_eq!(HttpOcrClient::assemble_text(Vec::new()), "");
    }

    #[test]
    fn test_zero_area_region_yields_empty_string() {
        let client = HttpOcrClient::new().unwrap();
        let empty = DynamicImage::ImageLuma8(GrayImage::new(0, 0));
        assert_eq!(client.recognize(&empty).unwrap(), "");
    }

    #[test]
    #[ignore] // Requires the OCR sidecar running locally
    fn test_health_check_against_sidecar() {
        let client = HttpOcrClient::new().unwrap();
        assert!(client.health_check().is_ok());
    }
}

//! Shared helpers for integration tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// In-memory PNG of the given size, standing in for an uploaded screenshot.
pub fn test_png(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([220, 60, 60])));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

/// Non-streaming `/api/generate` response body carrying the given text.
pub fn generate_body(response: &str) -> serde_json::Value {
    serde_json::json!({
        "model": "llama3.2-vision:11b",
        "created_at": "2025-01-01T12:00:00Z",
        "response": response,
        "done": true
    })
}

/// `/api/tags` response body listing the given model names.
pub fn tags_body(models: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "models": models
            .iter()
            .map(|name| serde_json::json!({ "name": name, "size": 7_000_000_000u64 }))
            .collect::<Vec<_>>()
    })
}

//! Image Admission and Normalization
//!
//! Validates an uploaded image and turns it into a bounded, base64-encoded
//! payload for the inference request. Oversized uploads are rejected before
//! any decoding happens; oversized dimensions are downsampled with a
//! high-quality filter. Everything stays in memory.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};

use crate::error::ScamLensError;

/// Admission limit for raw uploads.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Dimension bounds the normalized image must fit within.
pub const MAX_WIDTH: u32 = 1920;
pub const MAX_HEIGHT: u32 = 1080;

/// Input formats that are re-encoded as themselves. Anything else (or an
/// undetectable format) is re-encoded as lossless PNG.
const ENCODABLE_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::WebP,
    ImageFormat::Bmp,
];

/// A normalized image payload, owned by one pipeline invocation.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    base64: String,
    width: u32,
    height: u32,
    format: ImageFormat,
}

impl EncodedImage {
    /// Re-encoded image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base64 text encoding of the re-encoded bytes, as sent to the backend.
    pub fn base64(&self) -> &str {
        &self.base64
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// MIME type of the re-encoded payload.
    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

/// Validate and normalize an uploaded image.
///
/// Rejects non-image content types and uploads over [`MAX_UPLOAD_BYTES`]
/// (checked before decoding). Images larger than [`MAX_WIDTH`]×[`MAX_HEIGHT`]
/// are scaled to fit with Lanczos resampling, preserving aspect ratio;
/// smaller images are never upscaled.
pub fn normalize_image(bytes: &[u8], content_type: &str) -> Result<EncodedImage, ScamLensError> {
    if !content_type.starts_with("image/") {
        return Err(ScamLensError::InvalidInput(format!(
            "unsupported content type: {content_type}, only images are accepted"
        )));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ScamLensError::PayloadTooLarge {
            size: bytes.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let detected = image::guess_format(bytes).ok();
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ScamLensError::InvalidInput(format!("image could not be decoded: {e}")))?;

    let (width, height) = decoded.dimensions();
    let decoded = if width > MAX_WIDTH || height > MAX_HEIGHT {
        decoded.resize(MAX_WIDTH, MAX_HEIGHT, FilterType::Lanczos3)
    } else {
        decoded
    };

    let format = detected
        .filter(|f| ENCODABLE_FORMATS.contains(f))
        .unwrap_or(ImageFormat::Png);
    let decoded = prepare_colors(decoded, format);

    let mut encoded = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut encoded), format)
        .map_err(|e| ScamLensError::InvalidInput(format!("image could not be re-encoded: {e}")))?;

    let (width, height) = decoded.dimensions();
    let base64 = BASE64.encode(&encoded);
    Ok(EncodedImage {
        bytes: encoded,
        base64,
        width,
        height,
        format,
    })
}

/// Convert pixel layouts the target encoder cannot represent.
///
/// JPEG has no alpha channel; the WebP/GIF/BMP encoders only take 8-bit RGB
/// or RGBA buffers. PNG handles every layout the decoder can produce.
fn prepare_colors(image: DynamicImage, format: ImageFormat) -> DynamicImage {
    match format {
        ImageFormat::Jpeg => match image.color() {
            ColorType::Rgb8 | ColorType::L8 => image,
            _ => DynamicImage::ImageRgb8(image.to_rgb8()),
        },
        ImageFormat::WebP | ImageFormat::Gif | ImageFormat::Bmp => match image.color() {
            ColorType::Rgb8 | ColorType::Rgba8 => image,
            _ => DynamicImage::ImageRgba8(image.to_rgba8()),
        },
        _ => image,
    }
}

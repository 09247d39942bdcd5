use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::ImageFormat;

use crate::error::{CartoonizeError, Result};

/// Canonical edge length of both the img2img seed image and the output.
pub const CANVAS_SIZE: u32 = 512;

/// Filename offered for the downloadable output stream.
pub const DOWNLOAD_FILE_NAME: &str = "cartoonized.png";

/// An upload after normalization: upright, square, CANVAS_SIZE x CANVAS_SIZE,
/// PNG-encoded. This is what both services receive.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    png: Vec<u8>,
    source_width: u32,
    source_height: u32,
}

impl NormalizedImage {
    pub(crate) fn new(png: Vec<u8>, source_width: u32, source_height: u32) -> Self {
        Self {
            png,
            source_width,
            source_height,
        }
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png_bytes(self) -> Vec<u8> {
        self.png
    }

    /// Upright dimensions of the upload before cropping and resizing.
    pub fn source_dimensions(&self) -> (u32, u32) {
        (self.source_width, self.source_height)
    }

    /// Transport encoding used in both request bodies.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.png)
    }
}

/// The decoded output of the generation service, held as PNG bytes at the
/// canonical resolution.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    png: Vec<u8>,
}

impl GeneratedImage {
    /// Decode the base64 payload the generation service returns. The bytes
    /// must decode as a PNG image; anything else is an upstream fault.
    pub(crate) fn from_base64(encoded: &str) -> Result<Self> {
        let png = BASE64.decode(encoded).map_err(|e| {
            CartoonizeError::ServiceError(format!("output image is not valid base64: {}", e))
        })?;

        image::load_from_memory_with_format(&png, ImageFormat::Png).map_err(|e| {
            CartoonizeError::ServiceError(format!("output image is not a decodable PNG: {}", e))
        })?;

        Ok(Self { png })
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png_bytes(self) -> Vec<u8> {
        self.png
    }

    pub fn download_file_name(&self) -> &'static str {
        DOWNLOAD_FILE_NAME
    }
}

use std::io::Cursor;

use image::{imageops::FilterType, DynamicImage, GenericImageView, ImageFormat};

use crate::error::{CartoonizeError, Result};
use crate::models::image::{NormalizedImage, CANVAS_SIZE};

/// Turn an uploaded photo into the canonical square PNG both services
/// consume: decode, rotate upright per EXIF, center-crop to the largest
/// inscribed square, resize to CANVAS_SIZE, re-encode losslessly.
///
/// Decoding is the only step that can reject the upload; the EXIF read is
/// best-effort and never fails the request.
pub fn normalize(raw: &[u8]) -> Result<NormalizedImage> {
    let decoded = image::load_from_memory(raw)
        .map_err(|e| CartoonizeError::UnreadableImageError(e.to_string()))?;

    let upright = apply_orientation(decoded, read_exif_orientation(raw));
    let (width, height) = upright.dimensions();

    let squared = crop_max_square(&upright);
    let resized = squared.resize_exact(CANVAS_SIZE, CANVAS_SIZE, FilterType::CatmullRom);

    let mut buffer = Cursor::new(Vec::new());
    resized
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| CartoonizeError::InternalError(format!("PNG encoding failed: {}", e)))?;

    log::debug!(
        "🖼️  Normalized upload: {}x{} -> {}x{}",
        width,
        height,
        CANVAS_SIZE,
        CANVAS_SIZE
    );

    Ok(NormalizedImage::new(buffer.into_inner(), width, height))
}

/// Read the EXIF orientation tag from the raw upload. Any failure — no EXIF
/// container, a malformed one, a missing or non-numeric orientation field —
/// reads as `None` and the image is used as decoded.
fn read_exif_orientation(raw: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(raw);
    let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;

    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
}

/// Rotate the decoded image upright. Only the three pure rotations are
/// corrected (orientation 3 = 180°, 6 = 90° CW, 8 = 270° CW); the mirrored
/// orientations and anything unrecognized pass through unchanged.
fn apply_orientation(image: DynamicImage, orientation: Option<u32>) -> DynamicImage {
    match orientation {
        Some(3) => image.rotate180(),
        Some(6) => image.rotate90(),
        Some(8) => image.rotate270(),
        _ => image,
    }
}

/// Largest square that fits, centered on both axes.
fn crop_max_square(image: &DynamicImage) -> DynamicImage {
    let (width, height) = image.dimensions();
    let side = width.min(height);

    image.crop_imm((width - side) / 2, (height - side) / 2, side, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        encode_png(&DynamicImage::ImageRgb8(RgbImage::new(width, height)))
    }

    fn encode_png(image: &DynamicImage) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_normalize_always_yields_canvas_size() {
        for (width, height) in [(1, 1), (512, 512), (100, 50), (50, 100), (13, 700)] {
            let normalized = normalize(&png_bytes(width, height)).unwrap();
            let output = image::load_from_memory(normalized.png_bytes()).unwrap();
            assert_eq!(output.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
            assert_eq!(normalized.source_dimensions(), (width, height));
        }
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        let err = normalize(b"definitely not an image").unwrap_err();
        assert!(matches!(err, CartoonizeError::UnreadableImageError(_)));
    }

    #[test]
    fn test_crop_is_centered_on_the_long_axis() {
        // 9x4: side 4, horizontal offset (9 - 4) / 2 = 2.
        let mut wide = RgbImage::new(9, 4);
        wide.put_pixel(2, 0, Rgb([255, 0, 0]));
        let cropped = crop_max_square(&DynamicImage::ImageRgb8(wide));

        assert_eq!(cropped.dimensions(), (4, 4));
        assert_eq!(cropped.get_pixel(0, 0).0[0], 255);

        // 4x9: side 4, vertical offset (9 - 4) / 2 = 2.
        let mut tall = RgbImage::new(4, 9);
        tall.put_pixel(0, 2, Rgb([0, 255, 0]));
        let cropped = crop_max_square(&DynamicImage::ImageRgb8(tall));

        assert_eq!(cropped.dimensions(), (4, 4));
        assert_eq!(cropped.get_pixel(0, 0).0[1], 255);
    }

    #[test]
    fn test_orientation_rotations_swap_dimensions() {
        let base = DynamicImage::ImageRgb8(RgbImage::new(20, 10));

        assert_eq!(apply_orientation(base.clone(), Some(3)).dimensions(), (20, 10));
        assert_eq!(apply_orientation(base.clone(), Some(6)).dimensions(), (10, 20));
        assert_eq!(apply_orientation(base.clone(), Some(8)).dimensions(), (10, 20));
    }

    #[test]
    fn test_unrecognized_orientations_pass_through() {
        let mut base = RgbImage::new(3, 2);
        base.put_pixel(0, 0, Rgb([9, 9, 9]));
        let base = DynamicImage::ImageRgb8(base);

        for orientation in [None, Some(1), Some(2), Some(7), Some(99)] {
            let result = apply_orientation(base.clone(), orientation);
            assert_eq!(result.dimensions(), (3, 2));
            assert_eq!(result.get_pixel(0, 0), base.get_pixel(0, 0));
        }
    }

    #[test]
    fn test_plain_png_reads_no_orientation() {
        assert_eq!(read_exif_orientation(&png_bytes(4, 4)), None);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let input = png_bytes(30, 70);
        let first = normalize(&input).unwrap();
        let second = normalize(&input).unwrap();
        assert_eq!(first.png_bytes(), second.png_bytes());
    }
}

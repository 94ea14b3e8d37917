// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Bitmap capture and data-URI conversions.
//!
//! The design surface is captured through egui's viewport screenshot;
//! this module crops the returned frame to the surface rect and converts
//! bitmaps to and from the `data:` URIs embedded in design documents.

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::io::Cursor;
use std::path::Path;

/// Crop a captured frame (physical pixels) to a surface rect given in
/// logical points. The rect is clamped to the frame bounds.
pub fn crop_frame(
    frame: &egui::ColorImage,
    rect: egui::Rect,
    pixels_per_point: f32,
) -> egui::ColorImage {
    let [frame_w, frame_h] = frame.size;
    let x0 = ((rect.min.x * pixels_per_point).floor().max(0.0) as usize).min(frame_w);
    let y0 = ((rect.min.y * pixels_per_point).floor().max(0.0) as usize).min(frame_h);
    let x1 = ((rect.max.x * pixels_per_point).ceil().max(0.0) as usize).min(frame_w);
    let y1 = ((rect.max.y * pixels_per_point).ceil().max(0.0) as usize).min(frame_h);

    let width = x1.saturating_sub(x0);
    let height = y1.saturating_sub(y0);
    let mut pixels = Vec::with_capacity(width * height);
    for y in y0..y1 {
        let row = y * frame_w;
        pixels.extend_from_slice(&frame.pixels[row + x0..row + x1]);
    }
    egui::ColorImage {
        size: [width, height],
        pixels,
    }
}

/// Encode a captured surface as a PNG `data:` URI.
pub fn encode_png_data_uri(image: &egui::ColorImage) -> Result<String> {
    let [width, height] = image.size;
    let rgba = image::RgbaImage::from_raw(width as u32, height as u32, image.as_raw().to_vec())
        .context("Captured frame has inconsistent dimensions")?;

    let mut buffer = Vec::new();
    rgba.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(&buffer)))
}

/// Decode a `data:` URI into an egui image for display.
pub fn decode_data_uri(uri: &str) -> Result<egui::ColorImage> {
    let Some((_, payload)) = uri.split_once("base64,") else {
        bail!("Not a base64 data URI");
    };
    let bytes = BASE64.decode(payload.trim())?;
    let decoded = image::load_from_memory(&bytes)?.to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        decoded.as_raw(),
    ))
}

/// Read an image file and wrap it in a `data:` URI, preserving its
/// original encoding.
pub fn file_to_data_uri(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image file {}", path.display()))?;
    let format = image::guess_format(&bytes).context("Unrecognized image format")?;
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        BASE64.encode(&bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: usize, height: usize) -> egui::ColorImage {
        let pixels = (0..width * height)
            .map(|i| {
                if (i % width + i / width) % 2 == 0 {
                    egui::Color32::WHITE
                } else {
                    egui::Color32::BLACK
                }
            })
            .collect();
        egui::ColorImage {
            size: [width, height],
            pixels,
        }
    }

    #[test]
    fn png_data_uri_roundtrip() {
        let original = checker(8, 6);
        let uri = encode_png_data_uri(&original).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        let decoded = decode_data_uri(&uri).unwrap();
        assert_eq!(decoded.size, original.size);
        assert_eq!(decoded.pixels, original.pixels);
    }

    #[test]
    fn decode_rejects_non_data_uri() {
        assert!(decode_data_uri("not a uri").is_err());
        assert!(decode_data_uri("data:image/png;base64,!!!").is_err());
    }

    #[test]
    fn crop_extracts_requested_region() {
        let frame = checker(10, 10);
        let rect = egui::Rect::from_min_max(egui::pos2(2.0, 3.0), egui::pos2(6.0, 8.0));
        let cropped = crop_frame(&frame, rect, 1.0);
        assert_eq!(cropped.size, [4, 5]);
        assert_eq!(cropped.pixels[0], frame.pixels[3 * 10 + 2]);
    }

    #[test]
    fn crop_scales_by_pixels_per_point() {
        let frame = checker(20, 20);
        let rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(5.0, 5.0));
        let cropped = crop_frame(&frame, rect, 2.0);
        assert_eq!(cropped.size, [10, 10]);
    }

    #[test]
    fn crop_clamps_to_frame_bounds() {
        let frame = checker(4, 4);
        let rect = egui::Rect::from_min_max(egui::pos2(-5.0, -5.0), egui::pos2(100.0, 100.0));
        let cropped = crop_frame(&frame, rect, 1.0);
        assert_eq!(cropped.size, [4, 4]);
    }
}

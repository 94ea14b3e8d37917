// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Hex color code conversions.
//!
//! Wire formats store colors as `#rrggbb` strings; the UI works with
//! `egui::Color32`.

/// Parse a `#rrggbb` hex code. Falls back to black on malformed input,
/// matching the renderer's behavior for untrusted imported documents.
pub fn parse_hex(code: &str) -> egui::Color32 {
    let hex = code.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return egui::Color32::BLACK;
    }
    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => egui::Color32::from_rgb(r, g, b),
        _ => egui::Color32::BLACK,
    }
}

/// Format a color as a `#rrggbb` hex code. Alpha is dropped.
pub fn to_hex(color: egui::Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_roundtrip() {
        for code in ["#000000", "#ffffff", "#f44336", "#2196f3"] {
            assert_eq!(to_hex(parse_hex(code)), code);
        }
    }

    #[test]
    fn malformed_codes_fall_back_to_black() {
        assert_eq!(parse_hex(""), egui::Color32::BLACK);
        assert_eq!(parse_hex("#12"), egui::Color32::BLACK);
        assert_eq!(parse_hex("#zzzzzz"), egui::Color32::BLACK);
        // Six bytes but not six ASCII digits; must not slice mid-char.
        assert_eq!(parse_hex("#aaa\u{e9}a"), egui::Color32::BLACK);
    }
}

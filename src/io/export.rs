// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Design document export and import.
//!
//! Exports serialize the current session into a self-contained JSON
//! snapshot (selections normalized to `{code/id, name}` pairs, a
//! rasterized bitmap of the visible side, and a timestamp). Import is
//! deliberately lenient: any JSON object carrying `tshirt` and `designs`
//! keys is accepted, everything else about the shape is taken on faith.

use crate::models::design::{DesignSession, ItemContent, ItemRect};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A color normalized for export: hex code plus display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedColor {
    pub code: String,
    pub name: String,
}

/// A garment side normalized for export: wire id plus display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedSide {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedTshirt {
    pub color: NamedColor,
    pub size: String,
    pub side: NamedSide,
}

/// One overlay item in the export document. Image payloads are stripped
/// to the literal `"image"`; only text content survives export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub position: ItemRect,
    pub side: NamedSide,
}

/// The write-only snapshot format produced by "Save Design".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedDesign {
    pub tshirt: ExportedTshirt,
    pub designs: Vec<ExportedItem>,
    /// Rasterized bitmap of the currently visible side (`data:` URI).
    pub tshirt_image: String,
    pub timestamp: String,
}

/// Build the export document from the current session state.
pub fn build_document(session: &DesignSession, tshirt_image: String) -> ExportedDesign {
    let named_side = |side: crate::models::garment::GarmentSide| NamedSide {
        id: side.id().to_string(),
        name: side.label().to_string(),
    };

    ExportedDesign {
        tshirt: ExportedTshirt {
            color: NamedColor {
                code: session.selected_color.code().to_string(),
                name: session.selected_color.label().to_string(),
            },
            size: session.selected_size.label().to_string(),
            side: named_side(session.selected_side),
        },
        designs: session
            .items
            .iter()
            .map(|item| {
                let (kind, content, color) = match &item.content {
                    ItemContent::Image { .. } => ("image", "image".to_string(), None),
                    ItemContent::Text { content, color } => {
                        ("text", content.clone(), Some(color.clone()))
                    }
                };
                ExportedItem {
                    kind: kind.to_string(),
                    content,
                    color,
                    position: item.rect,
                    side: named_side(item.side),
                }
            })
            .collect(),
        tshirt_image,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

/// Default download-style file name: `tshirt-design-<ISO-date>.json`.
pub fn default_export_name() -> String {
    format!(
        "tshirt-design-{}.json",
        chrono::Local::now().format("%Y-%m-%d")
    )
}

/// Write the export document as pretty-printed JSON.
pub fn export_to_file(document: &ExportedDesign, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// An imported design document. Beyond the two required keys the shape is
/// unvalidated; accessors probe the expected layout and return `None`
/// where it does not hold.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDesign {
    raw: Value,
}

impl LoadedDesign {
    pub fn tshirt_image(&self) -> Option<&str> {
        self.raw.get("tshirtImage").and_then(Value::as_str)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.raw.get("timestamp").and_then(Value::as_str)
    }

    pub fn color_code(&self) -> Option<&str> {
        self.raw
            .pointer("/tshirt/color/code")
            .and_then(Value::as_str)
    }

    pub fn size(&self) -> Option<&str> {
        self.raw.pointer("/tshirt/size").and_then(Value::as_str)
    }

    pub fn design_count(&self) -> usize {
        self.raw
            .get("designs")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

/// Parse a design document from a JSON file. The only structural
/// requirement is the presence of the `tshirt` and `designs` keys.
pub fn import_from_file(path: &Path) -> Result<LoadedDesign> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    import_from_str(&text)
}

pub fn import_from_str(text: &str) -> Result<LoadedDesign> {
    let raw: Value = serde_json::from_str(text).context("File is not valid JSON")?;
    if raw.get("tshirt").is_none() || raw.get("designs").is_none() {
        bail!("Not a design document (missing tshirt/designs keys)");
    }
    Ok(LoadedDesign { raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::garment::{GarmentColor, GarmentSide, GarmentSize};

    fn sample_session() -> DesignSession {
        let mut session = DesignSession::new();
        session.selected_color = GarmentColor::Red;
        session.selected_size = GarmentSize::XL;
        session.selected_side = GarmentSide::Back;
        session.add_text_item("HELLO", "#ffffff");
        session.add_image_item("data:image/png;base64,AAAA".to_string());
        session
    }

    #[test]
    fn export_import_roundtrip_preserves_selection_and_count() {
        let session = sample_session();
        let document = build_document(&session, "data:image/png;base64,BBBB".to_string());
        let json = serde_json::to_string_pretty(&document).unwrap();

        let loaded = import_from_str(&json).unwrap();
        assert_eq!(loaded.color_code(), Some("#f44336"));
        assert_eq!(loaded.size(), Some("XL"));
        assert_eq!(loaded.design_count(), 2);
        assert_eq!(loaded.tshirt_image(), Some("data:image/png;base64,BBBB"));
    }

    #[test]
    fn image_payloads_are_stripped_on_export() {
        let document = build_document(&sample_session(), String::new());
        let image_item = document.designs.iter().find(|d| d.kind == "image").unwrap();
        assert_eq!(image_item.content, "image");
        assert!(image_item.color.is_none());
    }

    #[test]
    fn exported_sides_carry_id_and_name() {
        let document = build_document(&sample_session(), String::new());
        assert_eq!(document.tshirt.side.id, "back");
        assert_eq!(document.tshirt.side.name, "Back");
        // Items remember the side they were anchored to.
        assert_eq!(document.designs[0].side.id, "back");
    }

    #[test]
    fn import_requires_both_top_level_keys() {
        assert!(import_from_str(r#"{"tshirt": {}}"#).is_err());
        assert!(import_from_str(r#"{"designs": []}"#).is_err());
        // Any shape is fine once both keys exist.
        assert!(import_from_str(r#"{"tshirt": 1, "designs": "x"}"#).is_ok());
    }

    #[test]
    fn import_rejects_malformed_json() {
        assert!(import_from_str("not json at all").is_err());
    }

    #[test]
    fn default_name_embeds_iso_date() {
        let name = default_export_name();
        assert!(name.starts_with("tshirt-design-"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "tshirt-design-2026-01-01.json".len());
    }
}

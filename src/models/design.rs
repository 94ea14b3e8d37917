// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Design session state and overlay items.
//!
//! This module defines the overlay item store: the ordered collection of
//! image/text elements placed on the garment surface, together with the
//! current side/color/size selections.

use crate::models::garment::{GarmentColor, GarmentSide, GarmentSize};
use serde::{Deserialize, Serialize};

/// Position and size of an overlay item in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ItemRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Item payload, tagged by kind. Serializes to the flat wire shape
/// `{"type": "image"|"text", "content": ..., "color": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemContent {
    Image {
        /// Encoded bitmap payload (`data:` URI).
        content: String,
    },
    Text {
        content: String,
        /// Foreground color as a hex code.
        color: String,
    },
}

/// A single placed overlay element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignItem {
    pub id: String,
    #[serde(flatten)]
    pub content: ItemContent,
    #[serde(flatten)]
    pub rect: ItemRect,
    pub side: GarmentSide,
}

/// Default placement for newly added image items.
const IMAGE_DEFAULT_RECT: ItemRect = ItemRect {
    x: 50.0,
    y: 50.0,
    width: 100.0,
    height: 100.0,
};

/// Default placement for newly added text items.
const TEXT_DEFAULT_RECT: ItemRect = ItemRect {
    x: 50.0,
    y: 50.0,
    width: 150.0,
    height: 50.0,
};

/// Current design session: selections plus the full ordered item list.
///
/// Items are kept across all sides; filtering by the selected side happens
/// at render time, not here. Nothing is auto-saved; the session lives only
/// in memory until an explicit export or submission.
#[derive(Debug, Clone)]
pub struct DesignSession {
    pub selected_side: GarmentSide,
    pub selected_color: GarmentColor,
    pub selected_size: GarmentSize,
    /// Foreground color applied to newly added text items, hex code.
    pub selected_text_color: String,
    pub items: Vec<DesignItem>,
}

impl Default for DesignSession {
    fn default() -> Self {
        Self {
            selected_side: GarmentSide::Front,
            selected_color: GarmentColor::White,
            selected_size: GarmentSize::M,
            selected_text_color: "#000000".to_string(),
            items: Vec::new(),
        }
    }
}

impl DesignSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an image item with the default placement, anchored to the
    /// currently selected side. Returns the new item's id.
    pub fn add_image_item(&mut self, data_uri: String) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(DesignItem {
            id: id.clone(),
            content: ItemContent::Image { content: data_uri },
            rect: IMAGE_DEFAULT_RECT,
            side: self.selected_side,
        });
        log::info!("Added image item, total: {}", self.items.len());
        id
    }

    /// Append a text item anchored to the currently selected side.
    /// Empty or whitespace-only text is rejected.
    pub fn add_text_item(&mut self, text: &str, color: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(DesignItem {
            id: id.clone(),
            content: ItemContent::Text {
                content: text.to_string(),
                color: color.to_string(),
            },
            rect: TEXT_DEFAULT_RECT,
            side: self.selected_side,
        });
        log::info!("Added text item, total: {}", self.items.len());
        Some(id)
    }

    /// Commit a new placement for an item. The item's `side` is re-stamped
    /// to the currently selected side at commit time, so moving an item
    /// while viewing a different side reassigns it to that side.
    /// Returns false when the id is unknown.
    pub fn update_item(&mut self, id: &str, rect: ItemRect) -> bool {
        let side = self.selected_side;
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.rect = rect;
                item.side = side;
                true
            }
            None => false,
        }
    }

    /// Remove an item by id; no-op when absent.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;
        if removed {
            log::info!("Deleted item, total: {}", self.items.len());
        }
        removed
    }

    /// Items anchored to the currently selected side, in placement order.
    pub fn visible_items(&self) -> impl Iterator<Item = &DesignItem> {
        let side = self.selected_side;
        self.items.iter().filter(move |item| item.side == side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_image_appends_one_item_on_selected_side() {
        let mut session = DesignSession::new();
        session.selected_side = GarmentSide::Back;
        session.add_image_item("data:image/png;base64,AAAA".to_string());

        assert_eq!(session.items.len(), 1);
        assert_eq!(session.items[0].side, GarmentSide::Back);
        assert_eq!(session.items[0].rect, ItemRect::new(50.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn added_items_get_unique_ids() {
        let mut session = DesignSession::new();
        let a = session.add_text_item("one", "#000000").unwrap();
        let b = session.add_text_item("two", "#000000").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut session = DesignSession::new();
        assert!(session.add_text_item("", "#000000").is_none());
        assert!(session.add_text_item("   ", "#000000").is_none());
        assert!(session.items.is_empty());
    }

    #[test]
    fn text_item_uses_default_text_rect() {
        let mut session = DesignSession::new();
        session.add_text_item("HELLO", "#ff0000");
        assert_eq!(session.items[0].rect, ItemRect::new(50.0, 50.0, 150.0, 50.0));
    }

    #[test]
    fn switching_selections_does_not_alter_items() {
        let mut session = DesignSession::new();
        session.add_text_item("HELLO", "#f44336");
        let before = session.items.clone();

        for side in GarmentSide::ALL {
            session.selected_side = side;
            for color in GarmentColor::ALL {
                session.selected_color = color;
                for size in GarmentSize::ALL {
                    session.selected_size = size;
                    assert_eq!(session.items, before);
                }
            }
        }
    }

    #[test]
    fn item_added_on_front_is_not_visible_on_back() {
        let mut session = DesignSession::new();
        session.selected_side = GarmentSide::Front;
        session.add_text_item("HELLO", "#f44336");

        session.selected_side = GarmentSide::Back;
        assert_eq!(session.visible_items().count(), 0);

        session.selected_side = GarmentSide::Front;
        assert_eq!(session.visible_items().count(), 1);
    }

    #[test]
    fn update_restamps_side_to_selection_at_commit_time() {
        let mut session = DesignSession::new();
        session.selected_side = GarmentSide::Front;
        let id = session.add_text_item("HELLO", "#000000").unwrap();

        // Dragging the item while viewing the back reassigns it there.
        session.selected_side = GarmentSide::Back;
        assert!(session.update_item(&id, ItemRect::new(10.0, 20.0, 150.0, 50.0)));

        let item = &session.items[0];
        assert_eq!(item.side, GarmentSide::Back);
        assert_eq!(item.rect, ItemRect::new(10.0, 20.0, 150.0, 50.0));
    }

    #[test]
    fn update_unknown_id_is_a_noop() {
        let mut session = DesignSession::new();
        session.add_text_item("HELLO", "#000000");
        let before = session.items.clone();
        assert!(!session.update_item("no-such-id", ItemRect::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(session.items, before);
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let mut session = DesignSession::new();
        session.add_text_item("HELLO", "#000000");
        assert!(!session.delete_item("no-such-id"));
        assert_eq!(session.items.len(), 1);
    }

    #[test]
    fn delete_removes_by_id() {
        let mut session = DesignSession::new();
        let id = session.add_text_item("HELLO", "#000000").unwrap();
        assert!(session.delete_item(&id));
        assert!(session.items.is_empty());
    }

    #[test]
    fn item_serializes_to_flat_wire_shape() {
        let item = DesignItem {
            id: "abc".to_string(),
            content: ItemContent::Text {
                content: "HELLO".to_string(),
                color: "#ff0000".to_string(),
            },
            rect: ItemRect::new(50.0, 50.0, 150.0, 50.0),
            side: GarmentSide::Front,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["content"], "HELLO");
        assert_eq!(value["color"], "#ff0000");
        assert_eq!(value["x"], 50.0);
        assert_eq!(value["side"], "front");

        let back: DesignItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }
}

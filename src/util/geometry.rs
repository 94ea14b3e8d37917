// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the bounding math for the placement layer:
//! keeping dragged and resized overlay rects inside the garment surface.

use crate::models::design::ItemRect;

/// Smallest size an overlay item can be resized to, in surface units.
pub const MIN_ITEM_SIZE: f32 = 20.0;

/// Clamp a moved rect so it stays fully inside a surface of the given size.
/// The rect's size is preserved (rects larger than the surface are pinned
/// to the origin).
pub fn clamp_position(rect: ItemRect, surface_width: f32, surface_height: f32) -> ItemRect {
    let max_x = (surface_width - rect.width).max(0.0);
    let max_y = (surface_height - rect.height).max(0.0);
    ItemRect {
        x: rect.x.clamp(0.0, max_x),
        y: rect.y.clamp(0.0, max_y),
        ..rect
    }
}

/// Clamp a resized rect: enforce the minimum size and keep the grown
/// bottom-right corner inside the surface. The anchor (top-left) corner
/// does not move.
pub fn clamp_resize(rect: ItemRect, surface_width: f32, surface_height: f32) -> ItemRect {
    let max_width = (surface_width - rect.x).max(MIN_ITEM_SIZE);
    let max_height = (surface_height - rect.y).max(MIN_ITEM_SIZE);
    ItemRect {
        width: rect.width.clamp(MIN_ITEM_SIZE, max_width),
        height: rect.height.clamp(MIN_ITEM_SIZE, max_height),
        ..rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_inside_surface_is_unchanged() {
        let rect = ItemRect::new(50.0, 50.0, 100.0, 100.0);
        let clamped = clamp_position(rect, 400.0, 500.0);
        assert_eq!(clamped, rect);
    }

    #[test]
    fn position_is_clamped_to_surface_edges() {
        let rect = ItemRect::new(-30.0, 480.0, 100.0, 100.0);
        let clamped = clamp_position(rect, 400.0, 500.0);
        assert_eq!(clamped.x, 0.0);
        assert_eq!(clamped.y, 400.0);
        assert_eq!(clamped.width, 100.0);
        assert_eq!(clamped.height, 100.0);
    }

    #[test]
    fn oversized_rect_is_pinned_to_origin() {
        let rect = ItemRect::new(10.0, 10.0, 600.0, 700.0);
        let clamped = clamp_position(rect, 400.0, 500.0);
        assert_eq!(clamped.x, 0.0);
        assert_eq!(clamped.y, 0.0);
    }

    #[test]
    fn resize_enforces_minimum_size() {
        let rect = ItemRect::new(50.0, 50.0, 5.0, -10.0);
        let clamped = clamp_resize(rect, 400.0, 500.0);
        assert_eq!(clamped.width, MIN_ITEM_SIZE);
        assert_eq!(clamped.height, MIN_ITEM_SIZE);
    }

    #[test]
    fn resize_keeps_corner_inside_surface() {
        let rect = ItemRect::new(300.0, 450.0, 500.0, 500.0);
        let clamped = clamp_resize(rect, 400.0, 500.0);
        assert_eq!(clamped.width, 100.0);
        assert_eq!(clamped.height, 50.0);
        // Anchor corner untouched.
        assert_eq!(clamped.x, 300.0);
        assert_eq!(clamped.y, 450.0);
    }
}

// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Design canvas: garment surface and interactive placement layer.
//!
//! Renders the selected garment side as a tinted mockup and the overlay
//! items anchored to it. Items can be dragged anywhere inside the surface
//! and resized from their bottom-right corner; the in-gesture rect lives
//! here and is committed to the session only when the gesture ends.

use crate::models::design::{DesignSession, ItemContent, ItemRect};
use crate::models::garment::GarmentSide;
use crate::util::{color, geometry};
use std::collections::HashMap;

/// Logical size of the design surface, in points. Item coordinates are
/// surface-local within this box.
pub const SURFACE_WIDTH: f32 = 440.0;
pub const SURFACE_HEIGHT: f32 = 540.0;

const RESIZE_HANDLE: f32 = 12.0;
const DELETE_RADIUS: f32 = 8.0;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    /// A drag or resize gesture ended; commit the final rect.
    CommitRect { id: String, rect: ItemRect },
    DeleteItem(String),
}

enum GestureKind {
    Move,
    Resize,
}

/// A drag or resize in progress on one item. Held by the app across
/// frames; the session is untouched until the gesture ends.
pub struct ActiveGesture {
    id: String,
    kind: GestureKind,
    rect: ItemRect,
}

/// Per-item textures for image payloads. `None` marks a payload that
/// failed to decode and renders as a placeholder.
pub type ItemTextures = HashMap<String, Option<egui::TextureHandle>>;

/// Display the design surface and handle item manipulation.
/// Returns the action to apply plus the surface rect in screen points,
/// which the capture path needs for cropping.
pub fn show(
    ui: &mut egui::Ui,
    session: &DesignSession,
    gesture: &mut Option<ActiveGesture>,
    textures: &ItemTextures,
    clean_preview: bool,
) -> (CanvasAction, egui::Rect) {
    let mut action = CanvasAction::None;

    let available = ui.available_size();
    let size = egui::vec2(SURFACE_WIDTH, SURFACE_HEIGHT);
    let origin = ui.min_rect().min
        + egui::vec2(
            ((available.x - size.x) / 2.0).max(0.0),
            ((available.y - size.y) / 2.0).max(0.0),
        );
    let surface_rect = egui::Rect::from_min_size(origin, size);
    let _ = ui.allocate_rect(surface_rect, egui::Sense::hover());

    // Clean preview forces a white background and hides item chrome so
    // the captured bitmap carries no transient UI.
    let background = if clean_preview {
        egui::Color32::WHITE
    } else {
        color::parse_hex(session.selected_color.code())
    };
    let painter = ui.painter_at(surface_rect);
    painter.rect_filled(surface_rect, 6.0, background);

    let ink = mockup_ink(background);
    draw_mockup(&painter, surface_rect, session.selected_side, ink);

    if session.visible_items().next().is_none() && !clean_preview {
        painter.text(
            egui::pos2(surface_rect.center().x, surface_rect.max.y - 24.0),
            egui::Align2::CENTER_CENTER,
            "Upload an image or add text to begin",
            egui::FontId::proportional(13.0),
            ink.gamma_multiply(0.7),
        );
    }

    for item in session.visible_items() {
        let rect = match gesture {
            Some(g) if g.id == item.id => g.rect,
            _ => item.rect,
        };
        let screen_rect = egui::Rect::from_min_size(
            surface_rect.min + egui::vec2(rect.x, rect.y),
            egui::vec2(rect.width, rect.height),
        );

        match &item.content {
            ItemContent::Image { .. } => match textures.get(&item.id) {
                Some(Some(texture)) => {
                    painter.image(
                        texture.id(),
                        screen_rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
                _ => {
                    painter.rect_filled(screen_rect, 2.0, egui::Color32::from_gray(180));
                    painter.text(
                        screen_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "image",
                        egui::FontId::proportional(12.0),
                        egui::Color32::from_gray(80),
                    );
                }
            },
            ItemContent::Text {
                content,
                color: text_color,
            } => {
                painter.text(
                    screen_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    content,
                    egui::FontId::proportional(16.0),
                    color::parse_hex(text_color),
                );
            }
        }

        if clean_preview {
            continue;
        }

        // Body drag first, resize handle second: the later interact sits
        // on top where the two rects overlap.
        let move_response = ui.interact(
            screen_rect,
            ui.id().with(&item.id).with("move"),
            egui::Sense::drag(),
        );

        let handle_rect = egui::Rect::from_center_size(
            screen_rect.max,
            egui::vec2(RESIZE_HANDLE, RESIZE_HANDLE),
        );
        let resize_response = ui.interact(
            handle_rect,
            ui.id().with(&item.id).with("resize"),
            egui::Sense::drag(),
        );

        if move_response.drag_started() {
            *gesture = Some(ActiveGesture {
                id: item.id.clone(),
                kind: GestureKind::Move,
                rect,
            });
        } else if resize_response.drag_started() {
            *gesture = Some(ActiveGesture {
                id: item.id.clone(),
                kind: GestureKind::Resize,
                rect,
            });
        }

        if let Some(g) = gesture.as_mut().filter(|g| g.id == item.id) {
            let delta = match g.kind {
                GestureKind::Move => move_response.drag_delta(),
                GestureKind::Resize => resize_response.drag_delta(),
            };
            if delta != egui::Vec2::ZERO {
                g.rect = match g.kind {
                    GestureKind::Move => geometry::clamp_position(
                        ItemRect {
                            x: g.rect.x + delta.x,
                            y: g.rect.y + delta.y,
                            ..g.rect
                        },
                        SURFACE_WIDTH,
                        SURFACE_HEIGHT,
                    ),
                    GestureKind::Resize => geometry::clamp_resize(
                        ItemRect {
                            width: g.rect.width + delta.x,
                            height: g.rect.height + delta.y,
                            ..g.rect
                        },
                        SURFACE_WIDTH,
                        SURFACE_HEIGHT,
                    ),
                };
            }
        }

        if move_response.drag_stopped() || resize_response.drag_stopped() {
            if let Some(g) = gesture.take() {
                action = CanvasAction::CommitRect {
                    id: g.id,
                    rect: g.rect,
                };
            }
        }

        // Selection chrome: outline, resize handle, delete button.
        let active = move_response.hovered()
            || resize_response.hovered()
            || gesture.as_ref().is_some_and(|g| g.id == item.id);
        if active {
            painter.rect_stroke(
                screen_rect,
                2.0,
                egui::Stroke::new(1.0, egui::Color32::LIGHT_BLUE),
            );
        }
        painter.rect_filled(handle_rect, 2.0, egui::Color32::from_gray(235));
        painter.rect_stroke(
            handle_rect,
            2.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(100)),
        );

        let delete_center = egui::pos2(screen_rect.max.x, screen_rect.min.y);
        let delete_rect = egui::Rect::from_center_size(
            delete_center,
            egui::vec2(DELETE_RADIUS * 2.0, DELETE_RADIUS * 2.0),
        );
        let delete_response = ui.interact(
            delete_rect,
            ui.id().with(&item.id).with("delete"),
            egui::Sense::click(),
        );
        painter.circle_filled(
            delete_center,
            DELETE_RADIUS,
            egui::Color32::from_rgb(211, 47, 47),
        );
        painter.text(
            delete_center,
            egui::Align2::CENTER_CENTER,
            "\u{00d7}",
            egui::FontId::proportional(12.0),
            egui::Color32::WHITE,
        );
        if delete_response.clicked() {
            action = CanvasAction::DeleteItem(item.id.clone());
        }
    }

    (action, surface_rect)
}

/// Pick a mockup line color that stays visible on the shirt tint.
fn mockup_ink(background: egui::Color32) -> egui::Color32 {
    let luminance = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luminance < 128.0 {
        egui::Color32::from_gray(210)
    } else {
        egui::Color32::from_gray(70)
    }
}

/// Draw the mockup outline for one garment side.
fn draw_mockup(painter: &egui::Painter, surface: egui::Rect, side: GarmentSide, ink: egui::Color32) {
    let stroke = egui::Stroke::new(2.0, ink);

    match side {
        GarmentSide::Front | GarmentSide::Back => {
            let torso = egui::Rect::from_center_size(
                surface.center() + egui::vec2(0.0, 20.0),
                egui::vec2(surface.width() * 0.55, surface.height() * 0.62),
            );
            painter.rect_stroke(torso, 10.0, stroke);

            // Sleeve stubs off the shoulders.
            let sleeve = egui::vec2(surface.width() * 0.14, torso.height() * 0.30);
            painter.rect_stroke(
                egui::Rect::from_min_size(
                    egui::pos2(torso.min.x - sleeve.x, torso.min.y + 8.0),
                    sleeve,
                ),
                6.0,
                stroke,
            );
            painter.rect_stroke(
                egui::Rect::from_min_size(egui::pos2(torso.max.x, torso.min.y + 8.0), sleeve),
                6.0,
                stroke,
            );

            // The back has a shallower neckline than the front.
            let neck_depth = if side == GarmentSide::Front { 0.16 } else { 0.07 };
            let neck = egui::Rect::from_center_size(
                egui::pos2(torso.center().x, torso.min.y),
                egui::vec2(torso.width() * 0.34, torso.height() * neck_depth * 2.0),
            );
            painter.rect_stroke(neck, neck.height() / 2.0, stroke);
        }
        GarmentSide::InsideNeck | GarmentSide::OutsideNeck => {
            let center = surface.center();
            let outer = surface.width() * 0.30;
            painter.circle_stroke(center, outer, stroke);
            painter.circle_stroke(center, outer * 0.72, stroke);
        }
        GarmentSide::LeftSleeve | GarmentSide::RightSleeve => {
            let lean = if side == GarmentSide::LeftSleeve {
                -1.0
            } else {
                1.0
            };
            let half_width = surface.width() * 0.12;
            let top = surface.center() + egui::vec2(-lean * half_width, -surface.height() * 0.25);
            let bottom = surface.center() + egui::vec2(lean * half_width, surface.height() * 0.25);
            painter.line_segment(
                [
                    top + egui::vec2(-half_width, 0.0),
                    bottom + egui::vec2(-half_width, 0.0),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    top + egui::vec2(half_width, 0.0),
                    bottom + egui::vec2(half_width, 0.0),
                ],
                stroke,
            );
            painter.line_segment(
                [top + egui::vec2(-half_width, 0.0), top + egui::vec2(half_width, 0.0)],
                stroke,
            );
            painter.line_segment(
                [
                    bottom + egui::vec2(-half_width, 0.0),
                    bottom + egui::vec2(half_width, 0.0),
                ],
                stroke,
            );
        }
    }

    painter.text(
        egui::pos2(surface.center().x, surface.min.y + 16.0),
        egui::Align2::CENTER_CENTER,
        side.label(),
        egui::FontId::proportional(13.0),
        ink,
    );
}

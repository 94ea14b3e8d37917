// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Garment selection panel.
//!
//! Side, color and size pickers over the fixed option tables, plus the
//! buttons that feed the overlay item store and the export path.

use crate::models::design::DesignSession;
use crate::models::garment::{GarmentColor, GarmentSide, GarmentSize};
use crate::util::color;

/// Panel state the session does not own: the pending text entry and the
/// color-picker mirror of the session's text color.
pub struct SelectorState {
    pub text_input: String,
    pub text_color: egui::Color32,
}

impl Default for SelectorState {
    fn default() -> Self {
        Self {
            text_input: String::new(),
            text_color: egui::Color32::BLACK,
        }
    }
}

/// Requests the panel cannot satisfy itself.
pub enum SelectorAction {
    None,
    Back,
    UploadImage,
    AddText(String),
    SaveDesign,
}

/// Display the selection panel. Selections mutate the session directly;
/// file dialogs and store writes are the caller's job.
pub fn show(
    ui: &mut egui::Ui,
    session: &mut DesignSession,
    state: &mut SelectorState,
) -> SelectorAction {
    let mut action = SelectorAction::None;

    if ui.button("< Back").clicked() {
        action = SelectorAction::Back;
    }
    ui.separator();

    ui.label(egui::RichText::new("Shirt color").strong());
    ui.horizontal_wrapped(|ui| {
        for garment_color in GarmentColor::ALL {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::click());
            let center = rect.center();
            ui.painter()
                .circle_filled(center, 10.0, color::parse_hex(garment_color.code()));
            let ring = if session.selected_color == garment_color {
                egui::Stroke::new(2.0, egui::Color32::BLACK)
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(160))
            };
            ui.painter().circle_stroke(center, 10.0, ring);
            if response.clicked() {
                session.selected_color = garment_color;
            }
            let _ = response.on_hover_text(garment_color.label());
        }
    });
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Shirt size").strong());
    egui::ComboBox::from_id_source("garment-size")
        .selected_text(session.selected_size.label())
        .show_ui(ui, |ui| {
            for size in GarmentSize::ALL {
                ui.selectable_value(&mut session.selected_size, size, size.label());
            }
        });
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Shirt side").strong());
    ui.horizontal_wrapped(|ui| {
        for side in GarmentSide::ALL {
            if ui
                .selectable_label(session.selected_side == side, side.label())
                .clicked()
            {
                session.selected_side = side;
            }
        }
    });
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Text color").strong());
    if ui.color_edit_button_srgba(&mut state.text_color).changed() {
        session.selected_text_color = color::to_hex(state.text_color);
    }
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.text_edit_singleline(&mut state.text_input);
        if ui.button("Add Text").clicked() {
            action = SelectorAction::AddText(state.text_input.clone());
        }
    });
    ui.add_space(8.0);
    ui.separator();

    if ui.button("Upload Image...").clicked() {
        action = SelectorAction::UploadImage;
    }
    if ui.button("Save Design...").clicked() {
        action = SelectorAction::SaveDesign;
    }

    action
}

// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Read-only display of a submitted design.

use crate::models::submission::UserInfo;

/// What the preview screen shows: requester details plus the design's
/// embedded preview bitmap, already decoded into a texture.
pub struct PreviewState {
    pub user: UserInfo,
    pub texture: Option<egui::TextureHandle>,
    pub timestamp: Option<String>,
}

pub enum PreviewAction {
    None,
    Back,
}

pub fn show(ui: &mut egui::Ui, state: &PreviewState) -> PreviewAction {
    let mut action = PreviewAction::None;

    if ui.button("< Back").clicked() {
        action = PreviewAction::Back;
    }
    ui.add_space(8.0);
    ui.heading("Uploaded Design");
    ui.add_space(8.0);

    ui.label(format!(
        "Name: {} {}",
        state.user.name, state.user.surname
    ));
    ui.label(format!("Address: {}", state.user.address));
    if let Some(message) = &state.user.message {
        ui.label(format!("Message: {message}"));
    }
    ui.add_space(8.0);

    match &state.texture {
        Some(texture) => {
            ui.add(egui::Image::new(texture).max_width(420.0));
        }
        None => {
            ui.label(
                egui::RichText::new("No preview image in this design document")
                    .italics()
                    .weak(),
            );
        }
    }

    if let Some(timestamp) = &state.timestamp {
        let display = chrono::DateTime::parse_from_rfc3339(timestamp)
            .map(|t| t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| timestamp.clone());
        ui.add_space(8.0);
        ui.label(egui::RichText::new(format!("Designed at: {display}")).weak());
    }

    action
}

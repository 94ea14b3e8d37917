// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the mode controller, the design session, the
//! rasterization capture state machine and the wiring between the UI
//! screens, the storage collaborator and the export/import paths.

use crate::io::{export, raster};
use crate::models::design::DesignSession;
use crate::models::submission::{DesignData, TshirtSelection, UserInfo};
use crate::store::{submit_design, Store};
use crate::ui::{admin, canvas, preview, selectors, upload};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Top-level screen currently shown. Always starts at `Select`; the mode
/// is never persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Select,
    Upload,
    Create,
    Preview,
}

impl Mode {
    /// Legal screen transitions. Everything else is refused.
    pub fn can_transition(self, next: Mode) -> bool {
        matches!(
            (self, next),
            (Mode::Select, Mode::Upload)
                | (Mode::Select, Mode::Create)
                | (Mode::Upload, Mode::Select)
                | (Mode::Upload, Mode::Preview)
                | (Mode::Create, Mode::Select)
                | (Mode::Preview, Mode::Select)
        )
    }
}

/// Rasterization capture in progress.
///
/// Capturing goes through a settle frame: the clean-preview flag is
/// raised, one frame renders without item chrome, then the screenshot is
/// requested and the next frame delivers the bitmap.
enum CaptureState {
    Idle,
    Settling { path: PathBuf, frames: u8 },
    Waiting { path: PathBuf },
}

/// Main application state.
pub struct StudioApp {
    mode: Mode,
    session: DesignSession,

    /// Drag/resize gesture in flight on the canvas.
    gesture: Option<canvas::ActiveGesture>,

    /// Decoded textures for image items, keyed by item id.
    item_textures: canvas::ItemTextures,

    /// Surface rect from the last rendered frame, for screenshot cropping.
    surface_rect: Option<egui::Rect>,

    capture: CaptureState,

    /// Hides item chrome and forces a white background while capturing.
    clean_preview: bool,

    /// One-line status/error message shown in the bottom bar.
    status: Option<String>,

    selector: selectors::SelectorState,
    upload: upload::UploadState,
    preview: Option<preview::PreviewState>,
    admin: admin::AdminState,

    store: Box<dyn Store>,
}

impl StudioApp {
    pub fn new(store: Box<dyn Store>) -> Self {
        Self {
            mode: Mode::Select,
            session: DesignSession::new(),
            gesture: None,
            item_textures: Default::default(),
            surface_rect: None,
            capture: CaptureState::Idle,
            clean_preview: false,
            status: None,
            selector: Default::default(),
            upload: Default::default(),
            preview: None,
            admin: Default::default(),
            store,
        }
    }

    fn set_mode(&mut self, next: Mode) {
        if self.mode.can_transition(next) {
            log::info!("Mode {:?} -> {:?}", self.mode, next);
            self.mode = next;
        } else {
            log::warn!("Refused mode transition {:?} -> {:?}", self.mode, next);
        }
    }

    /// Create textures for image items that do not have one yet. A failed
    /// decode is recorded so it is not retried every frame.
    fn ensure_item_textures(&mut self, ctx: &egui::Context) {
        for item in &self.session.items {
            if self.item_textures.contains_key(&item.id) {
                continue;
            }
            if let crate::models::design::ItemContent::Image { content } = &item.content {
                let texture = match raster::decode_data_uri(content) {
                    Ok(image) => Some(ctx.load_texture(
                        format!("item-{}", item.id),
                        image,
                        egui::TextureOptions::LINEAR,
                    )),
                    Err(e) => {
                        log::error!("Failed to decode image item {}: {}", item.id, e);
                        None
                    }
                };
                self.item_textures.insert(item.id.clone(), texture);
            }
        }
    }

    fn add_image_from_file(&mut self, path: &Path) {
        match raster::file_to_data_uri(path) {
            Ok(uri) => {
                self.session.add_image_item(uri);
                self.status = None;
            }
            Err(e) => {
                log::error!("Failed to load image {}: {}", path.display(), e);
                self.status = Some(format!("Could not load image: {e}"));
            }
        }
    }

    /// Start the export capture: settle one clean frame, then screenshot.
    fn begin_export(&mut self, ctx: &egui::Context, path: PathBuf) {
        if !matches!(self.capture, CaptureState::Idle) {
            return;
        }
        self.clean_preview = true;
        self.capture = CaptureState::Settling { path, frames: 1 };
        ctx.request_repaint();
    }

    /// Advance the capture state machine and fire the screenshot request
    /// once the clean frame has rendered.
    fn drive_capture(&mut self, ctx: &egui::Context) {
        match &mut self.capture {
            CaptureState::Settling { frames, .. } if *frames > 0 => {
                *frames -= 1;
                ctx.request_repaint();
            }
            CaptureState::Settling { .. } => {
                if let CaptureState::Settling { path, .. } =
                    std::mem::replace(&mut self.capture, CaptureState::Idle)
                {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot);
                    self.capture = CaptureState::Waiting { path };
                    ctx.request_repaint();
                }
            }
            _ => {}
        }
    }

    /// Consume a delivered screenshot frame: crop to the surface, encode,
    /// and write the export document.
    fn finish_capture(&mut self, ctx: &egui::Context, frame: &Arc<egui::ColorImage>) {
        let CaptureState::Waiting { path } =
            std::mem::replace(&mut self.capture, CaptureState::Idle)
        else {
            return;
        };
        self.clean_preview = false;

        let Some(surface_rect) = self.surface_rect else {
            log::error!("Screenshot arrived without a rendered surface");
            self.status = Some("Export failed: design surface not visible.".to_string());
            return;
        };

        let cropped = raster::crop_frame(frame, surface_rect, ctx.pixels_per_point());
        let result = raster::encode_png_data_uri(&cropped).and_then(|uri| {
            let document = export::build_document(&self.session, uri);
            export::export_to_file(&document, &path)
        });
        match result {
            Ok(()) => {
                log::info!("Exported design to {}", path.display());
                self.status = Some(format!("Design saved to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export design: {}", e);
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    fn choose_design_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Design documents", &["json"])
            .pick_file()
        else {
            return;
        };
        self.upload.error = None;
        self.upload.content = None;
        self.upload.file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());

        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            self.upload.error = Some("Please choose a .json file.".to_string());
            return;
        }
        match export::import_from_file(&path) {
            Ok(content) => {
                log::info!("Loaded design document {}", path.display());
                self.upload.content = Some(content);
            }
            Err(e) => {
                log::error!("Failed to import {}: {}", path.display(), e);
                self.upload.error = Some(format!("Invalid design file: {e}"));
            }
        }
    }

    /// Submission path: validate, post to the store, and on success move
    /// to the preview of what was uploaded.
    fn submit_upload(&mut self, ctx: &egui::Context) {
        if self.upload.submitting {
            // A submission is already in flight.
            return;
        }
        if let Err(message) =
            upload::validate_submission(&self.upload.form, self.upload.content.is_some())
        {
            self.upload.error = Some(message.to_string());
            return;
        }
        let Some(content) = self.upload.content.as_ref() else {
            return;
        };
        self.upload.error = None;
        self.upload.submitting = true;

        // The original captured a live surface here; on the upload path
        // there is none, so the document's embedded bitmap is the preview.
        let preview_image = content.tshirt_image().unwrap_or_default().to_string();
        let user_info = self.upload.form.user_info();
        let design_data = DesignData {
            tshirt: TshirtSelection {
                color: self.session.selected_color.code().to_string(),
                size: self.session.selected_size.label().to_string(),
            },
            items: self.session.items.clone(),
            preview_image,
        };

        match submit_design(self.store.as_mut(), user_info.clone(), design_data) {
            Ok(stored) => {
                self.status = Some(format!("Design #{} submitted for review.", stored.id));
                self.enter_preview(ctx, user_info);
                self.set_mode(Mode::Preview);
            }
            Err(e) => {
                log::error!("Submission failed: {}", e);
                self.upload.error = Some(format!("Submission failed: {e}"));
            }
        }
        self.upload.submitting = false;
    }

    /// Build the preview screen from the uploaded document.
    fn enter_preview(&mut self, ctx: &egui::Context, user: UserInfo) {
        let content = self.upload.content.as_ref();
        let texture = content
            .and_then(|c| c.tshirt_image())
            .and_then(|uri| match raster::decode_data_uri(uri) {
                Ok(image) => {
                    Some(ctx.load_texture("design-preview", image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    log::error!("Failed to decode preview image: {}", e);
                    None
                }
            });
        self.preview = Some(preview::PreviewState {
            user,
            texture,
            timestamp: content.and_then(|c| c.timestamp()).map(String::from),
        });
    }

    fn handle_selector_action(&mut self, ctx: &egui::Context, action: selectors::SelectorAction) {
        match action {
            selectors::SelectorAction::Back => self.set_mode(Mode::Select),
            selectors::SelectorAction::UploadImage => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "gif", "webp"])
                    .pick_file()
                {
                    self.add_image_from_file(&path);
                }
            }
            selectors::SelectorAction::AddText(text) => {
                let color = self.session.selected_text_color.clone();
                if self.session.add_text_item(&text, &color).is_some() {
                    self.selector.text_input.clear();
                }
            }
            selectors::SelectorAction::SaveDesign => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name(export::default_export_name())
                    .save_file()
                {
                    self.begin_export(ctx, path);
                }
            }
            selectors::SelectorAction::None => {}
        }
    }

    fn handle_canvas_action(&mut self, action: canvas::CanvasAction) {
        match action {
            canvas::CanvasAction::CommitRect { id, rect } => {
                if !self.session.update_item(&id, rect) {
                    log::warn!("Gesture ended on unknown item {}", id);
                }
            }
            canvas::CanvasAction::DeleteItem(id) => {
                self.session.delete_item(&id);
                self.item_textures.remove(&id);
            }
            canvas::CanvasAction::None => {}
        }
    }

    fn show_select_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.heading(
                egui::RichText::new("T-Shirt Design Studio")
                    .size(32.0),
            );
            ui.add_space(30.0);
            ui.horizontal(|ui| {
                let total = 300.0;
                ui.add_space((ui.available_width() - total).max(0.0) / 2.0);
                if ui
                    .add_sized([140.0, 44.0], egui::Button::new("Upload a Design"))
                    .clicked()
                {
                    self.set_mode(Mode::Upload);
                }
                ui.add_space(20.0);
                if ui
                    .add_sized([140.0, 44.0], egui::Button::new("Create a Design"))
                    .clicked()
                {
                    self.set_mode(Mode::Create);
                }
            });
        });
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deliver a completed screenshot to the capture machinery.
        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        if let Some(frame) = screenshot {
            self.finish_capture(ctx, &frame);
        }
        self.drive_capture(ctx);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Admin Panel...").clicked() {
                        self.admin.open = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(match self.mode {
                    Mode::Select => "Start",
                    Mode::Upload => "Upload a design",
                    Mode::Create => "Design canvas",
                    Mode::Preview => "Submitted design",
                });
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        match self.mode {
            Mode::Select => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.show_select_screen(ui);
                });
            }
            Mode::Upload => {
                let action = egui::CentralPanel::default()
                    .show(ctx, |ui| upload::show(ui, &mut self.upload))
                    .inner;
                match action {
                    upload::UploadAction::Back => self.set_mode(Mode::Select),
                    upload::UploadAction::ChooseFile => self.choose_design_file(),
                    upload::UploadAction::Submit => self.submit_upload(ctx),
                    upload::UploadAction::None => {}
                }
            }
            Mode::Create => {
                self.ensure_item_textures(ctx);

                let selector_action = egui::SidePanel::left("selectors")
                    .default_width(220.0)
                    .show(ctx, |ui| {
                        selectors::show(ui, &mut self.session, &mut self.selector)
                    })
                    .inner;
                self.handle_selector_action(ctx, selector_action);

                let (canvas_action, surface_rect) = egui::CentralPanel::default()
                    .show(ctx, |ui| {
                        canvas::show(
                            ui,
                            &self.session,
                            &mut self.gesture,
                            &self.item_textures,
                            self.clean_preview,
                        )
                    })
                    .inner;
                self.surface_rect = Some(surface_rect);
                self.handle_canvas_action(canvas_action);
            }
            Mode::Preview => {
                let action = egui::CentralPanel::default()
                    .show(ctx, |ui| match &self.preview {
                        Some(state) => preview::show(ui, state),
                        None => {
                            ui.label("No design loaded.");
                            preview::PreviewAction::None
                        }
                    })
                    .inner;
                if matches!(action, preview::PreviewAction::Back) {
                    self.set_mode(Mode::Select);
                }
            }
        }

        // Admin window, independent of the mode machine.
        if self.admin.open {
            let mut open = self.admin.open;
            egui::Window::new("Admin Panel")
                .open(&mut open)
                .default_width(560.0)
                .show(ctx, |ui| {
                    admin::show(ui, &mut self.admin, self.store.as_mut());
                });
            self.admin.open = open;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_mode_is_select() {
        // The mode machine always restarts at the entry screen.
        assert!(Mode::Select.can_transition(Mode::Upload));
        assert!(Mode::Select.can_transition(Mode::Create));
    }

    #[test]
    fn preview_is_only_reached_from_upload() {
        assert!(Mode::Upload.can_transition(Mode::Preview));
        assert!(!Mode::Select.can_transition(Mode::Preview));
        assert!(!Mode::Create.can_transition(Mode::Preview));
        assert!(!Mode::Preview.can_transition(Mode::Preview));
    }

    #[test]
    fn preview_only_exits_back_to_select() {
        assert!(Mode::Preview.can_transition(Mode::Select));
        assert!(!Mode::Preview.can_transition(Mode::Upload));
        assert!(!Mode::Preview.can_transition(Mode::Create));
    }

    #[test]
    fn no_direct_jump_between_upload_and_create() {
        assert!(!Mode::Upload.can_transition(Mode::Create));
        assert!(!Mode::Create.can_transition(Mode::Upload));
        assert!(!Mode::Create.can_transition(Mode::Preview));
    }

    #[test]
    fn self_transitions_are_refused() {
        for mode in [Mode::Select, Mode::Upload, Mode::Create, Mode::Preview] {
            assert!(!mode.can_transition(mode));
        }
    }
}

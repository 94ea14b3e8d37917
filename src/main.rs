// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Garment Design Studio
//!
//! A cross-platform desktop application for composing image and text
//! overlays on a shirt mockup, exporting designs as JSON documents and
//! submitting them to a review queue.

mod app;
mod io;
mod models;
mod store;
mod ui;
mod util;

use anyhow::Result;
use app::StudioApp;
use store::json_file::JsonFileStore;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let store = JsonFileStore::open(store::default_data_path())?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Garment Design Studio"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Garment Design Studio",
        options,
        Box::new(|_cc| Ok(Box::new(StudioApp::new(Box::new(store))))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

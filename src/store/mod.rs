// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Storage collaborator for submitted designs, products and comments.
//!
//! The UI only sees the [`Store`] trait; [`json_file::JsonFileStore`] is
//! the bundled adapter persisting everything to a single JSON document.
//! Semantics are deliberately plain: last write wins, new ids are
//! `max existing id + 1`.

pub mod json_file;

use crate::models::submission::{
    Comment, CommentStatus, DesignData, DesignStatus, Product, SubmittedDesign, UserInfo,
};
use anyhow::Result;
use std::path::PathBuf;

/// A product as entered in the admin form, before the store assigns an id
/// and zeroed rating counters.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: u64,
    pub description: String,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub shop_link: String,
}

/// CRUD surface consumed by the submission path and the admin panel.
pub trait Store {
    fn list_products(&self) -> Vec<Product>;
    fn add_product(&mut self, product: NewProduct) -> Result<Product>;
    fn update_product(&mut self, product: Product) -> Result<()>;
    fn delete_product(&mut self, id: u64) -> Result<()>;

    fn list_comments(&self) -> Vec<Comment>;
    fn set_comment_status(&mut self, id: u64, status: CommentStatus) -> Result<()>;
    fn delete_comment(&mut self, id: u64) -> Result<()>;

    fn list_designs(&self) -> Vec<SubmittedDesign>;
    fn add_design(&mut self, design: SubmittedDesign) -> Result<SubmittedDesign>;
    fn set_design_status(&mut self, id: u64, status: DesignStatus) -> Result<()>;
    fn delete_design(&mut self, id: u64) -> Result<()>;
}

/// Submission endpoint: stamp the payload with a creation time and the
/// `pending` status, then append it to the review queue. The returned
/// record carries the store-assigned id.
pub fn submit_design(
    store: &mut dyn Store,
    user_info: UserInfo,
    design_data: DesignData,
) -> Result<SubmittedDesign> {
    let design = SubmittedDesign {
        id: 0, // assigned by the store
        user_info,
        design_data,
        created_at: chrono::Utc::now().to_rfc3339(),
        status: DesignStatus::Pending,
    };
    let stored = store.add_design(design)?;
    log::info!("Design {} submitted for review", stored.id);
    Ok(stored)
}

/// Data file location: `GARMENT_STUDIO_DATA` when set, otherwise a file
/// in the working directory.
pub fn default_data_path() -> PathBuf {
    std::env::var_os("GARMENT_STUDIO_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("garment-studio-data.json"))
}

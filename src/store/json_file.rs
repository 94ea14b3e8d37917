// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! JSON-file-backed store adapter.
//!
//! Keeps the full data set in memory and rewrites the backing file on
//! every mutation. First open seeds the catalog with a sample product
//! and an approved comment so the admin surface has something to show.

use super::{NewProduct, Store};
use crate::models::submission::{
    Comment, CommentStatus, DesignStatus, Product, SubmittedDesign,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    products: Vec<Product>,
    comments: Vec<Comment>,
    designs: Vec<SubmittedDesign>,
}

pub struct JsonFileStore {
    path: PathBuf,
    data: StoreData,
}

fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> u64) -> u64 {
    items.iter().map(id_of).max().unwrap_or(0) + 1
}

fn seed_data() -> StoreData {
    StoreData {
        products: vec![Product {
            id: 1,
            name: "Spirit Print Oversize T-shirt".to_string(),
            price: 299,
            description: "Rebel-spirit themed shirt.".to_string(),
            images: Vec::new(),
            colors: vec!["WHITE".to_string()],
            sizes: vec!["S", "M", "L", "XL", "XXL"]
                .into_iter()
                .map(String::from)
                .collect(),
            shop_link: String::new(),
            rating: 4.8,
            review_count: 24,
        }],
        comments: vec![Comment {
            id: 1,
            product_id: 1,
            user: "A. Customer".to_string(),
            comment: "Great product!".to_string(),
            rating: 5,
            date: "2024-01-15".to_string(),
            status: CommentStatus::Approved,
        }],
        designs: Vec::new(),
    }
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing data or seeding the
    /// defaults on first use.
    pub fn open(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Store file {} is corrupt", path.display()))?
        } else {
            seed_data()
        };
        let store = Self { path, data };
        if !store.path.exists() {
            store.flush()?;
        }
        log::info!(
            "Opened store at {} ({} designs)",
            store.path.display(),
            store.data.designs.len()
        );
        Ok(store)
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write store file {}", self.path.display()))?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn list_products(&self) -> Vec<Product> {
        self.data.products.clone()
    }

    fn add_product(&mut self, product: NewProduct) -> Result<Product> {
        let stored = Product {
            id: next_id(&self.data.products, |p| p.id),
            name: product.name,
            price: product.price,
            description: product.description,
            images: product.images,
            colors: product.colors,
            sizes: product.sizes,
            shop_link: product.shop_link,
            rating: 0.0,
            review_count: 0,
        };
        self.data.products.push(stored.clone());
        self.flush()?;
        Ok(stored)
    }

    fn update_product(&mut self, product: Product) -> Result<()> {
        if let Some(existing) = self.data.products.iter_mut().find(|p| p.id == product.id) {
            *existing = product;
            self.flush()?;
        }
        Ok(())
    }

    fn delete_product(&mut self, id: u64) -> Result<()> {
        self.data.products.retain(|p| p.id != id);
        self.flush()
    }

    fn list_comments(&self) -> Vec<Comment> {
        self.data.comments.clone()
    }

    fn set_comment_status(&mut self, id: u64, status: CommentStatus) -> Result<()> {
        if let Some(comment) = self.data.comments.iter_mut().find(|c| c.id == id) {
            comment.status = status;
            self.flush()?;
        }
        Ok(())
    }

    fn delete_comment(&mut self, id: u64) -> Result<()> {
        self.data.comments.retain(|c| c.id != id);
        self.flush()
    }

    fn list_designs(&self) -> Vec<SubmittedDesign> {
        self.data.designs.clone()
    }

    fn add_design(&mut self, mut design: SubmittedDesign) -> Result<SubmittedDesign> {
        design.id = next_id(&self.data.designs, |d| d.id);
        self.data.designs.push(design.clone());
        self.flush()?;
        Ok(design)
    }

    fn set_design_status(&mut self, id: u64, status: DesignStatus) -> Result<()> {
        if let Some(design) = self.data.designs.iter_mut().find(|d| d.id == id) {
            design.status = status;
            self.flush()?;
        }
        Ok(())
    }

    fn delete_design(&mut self, id: u64) -> Result<()> {
        self.data.designs.retain(|d| d.id != id);
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::{DesignData, TshirtSelection, UserInfo};
    use crate::store::submit_design;

    fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("data.json")).unwrap();
        (dir, store)
    }

    fn sample_design_data() -> DesignData {
        DesignData {
            tshirt: TshirtSelection {
                color: "#ffffff".to_string(),
                size: "M".to_string(),
            },
            items: Vec::new(),
            preview_image: "data:image/png;base64,AAAA".to_string(),
        }
    }

    fn sample_user() -> UserInfo {
        UserInfo {
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            address: "London".to_string(),
            message: Some("rush order".to_string()),
        }
    }

    #[test]
    fn first_open_seeds_catalog() {
        let (_dir, store) = temp_store();
        assert_eq!(store.list_products().len(), 1);
        assert_eq!(store.list_comments().len(), 1);
        assert!(store.list_designs().is_empty());
    }

    #[test]
    fn submitted_designs_get_sequential_ids_and_pending_status() {
        let (_dir, mut store) = temp_store();
        let first = submit_design(&mut store, sample_user(), sample_design_data()).unwrap();
        let second = submit_design(&mut store, sample_user(), sample_design_data()).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, DesignStatus::Pending);
        assert!(!first.created_at.is_empty());
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        {
            let mut store = JsonFileStore::open(path.clone()).unwrap();
            submit_design(&mut store, sample_user(), sample_design_data()).unwrap();
            store.set_design_status(1, DesignStatus::Approved).unwrap();
        }

        let store = JsonFileStore::open(path).unwrap();
        let designs = store.list_designs();
        assert_eq!(designs.len(), 1);
        assert_eq!(designs[0].status, DesignStatus::Approved);
        assert_eq!(designs[0].user_info.name, "Ada");
    }

    #[test]
    fn id_counter_follows_max_surviving_id() {
        let (_dir, mut store) = temp_store();
        submit_design(&mut store, sample_user(), sample_design_data()).unwrap();
        submit_design(&mut store, sample_user(), sample_design_data()).unwrap();
        store.delete_design(2).unwrap();

        let third = submit_design(&mut store, sample_user(), sample_design_data()).unwrap();
        assert_eq!(third.id, 2);
    }

    #[test]
    fn mutations_on_unknown_ids_are_noops() {
        let (_dir, mut store) = temp_store();
        store.set_design_status(99, DesignStatus::Rejected).unwrap();
        store.delete_design(99).unwrap();
        store.delete_comment(99).unwrap();
        assert_eq!(store.list_comments().len(), 1);
    }

    #[test]
    fn added_products_start_with_zero_rating() {
        let (_dir, mut store) = temp_store();
        let product = store
            .add_product(NewProduct {
                name: "Classic Tee".to_string(),
                price: 199,
                description: String::new(),
                images: Vec::new(),
                colors: vec!["BLACK".to_string()],
                sizes: vec!["M".to_string()],
                shop_link: String::new(),
            })
            .unwrap();
        assert_eq!(product.id, 2);
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.review_count, 0);
    }

    #[test]
    fn comment_status_update_persists() {
        let (_dir, mut store) = temp_store();
        store.set_comment_status(1, CommentStatus::Pending).unwrap();
        assert_eq!(store.list_comments()[0].status, CommentStatus::Pending);
    }
}

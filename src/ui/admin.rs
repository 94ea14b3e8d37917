// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Admin review panel.
//!
//! Gated by a hardcoded password compared in the client. This is a
//! capability gate only, with no confidentiality guarantee; a real
//! deployment needs server-side authentication.

use crate::models::submission::{CommentStatus, DesignStatus};
use crate::store::{NewProduct, Store};

const ADMIN_PASSWORD: &str = "123";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Designs,
    Comments,
    Products,
}

#[derive(Default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub colors: String,
    pub sizes: String,
    pub shop_link: String,
    pub error: Option<String>,
}

pub struct AdminState {
    pub open: bool,
    pub authenticated: bool,
    pub password_input: String,
    pub login_error: bool,
    pub tab: AdminTab,
    pub product_form: ProductForm,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            open: false,
            authenticated: false,
            password_input: String::new(),
            login_error: false,
            tab: AdminTab::Designs,
            product_form: ProductForm::default(),
        }
    }
}

pub fn show(ui: &mut egui::Ui, state: &mut AdminState, store: &mut dyn Store) {
    if !state.authenticated {
        show_gate(ui, state);
        return;
    }

    ui.horizontal(|ui| {
        for (tab, label) in [
            (AdminTab::Designs, "Designs"),
            (AdminTab::Comments, "Comments"),
            (AdminTab::Products, "Products"),
        ] {
            if ui.selectable_label(state.tab == tab, label).clicked() {
                state.tab = tab;
            }
        }
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| match state.tab {
        AdminTab::Designs => show_designs(ui, store),
        AdminTab::Comments => show_comments(ui, store),
        AdminTab::Products => show_products(ui, state, store),
    });
}

fn show_gate(ui: &mut egui::Ui, state: &mut AdminState) {
    ui.label("Password");
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.password_input).password(true),
    );
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if ui.button("Unlock").clicked() || submitted {
        if state.password_input == ADMIN_PASSWORD {
            state.authenticated = true;
            state.login_error = false;
            log::info!("Admin panel unlocked");
        } else {
            state.login_error = true;
        }
        state.password_input.clear();
    }
    if state.login_error {
        ui.colored_label(egui::Color32::from_rgb(211, 47, 47), "Wrong password.");
    }
}

fn status_badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.colored_label(color, text);
}

fn show_designs(ui: &mut egui::Ui, store: &mut dyn Store) {
    let designs = store.list_designs();
    if designs.is_empty() {
        ui.label("No submitted designs.");
        return;
    }
    for design in designs {
        ui.horizontal(|ui| {
            ui.label(format!(
                "#{} {} {} ({} items)",
                design.id,
                design.user_info.name,
                design.user_info.surname,
                design.design_data.items.len()
            ));
            match design.status {
                DesignStatus::Pending => {
                    status_badge(ui, "pending", egui::Color32::from_rgb(245, 124, 0))
                }
                DesignStatus::Approved => {
                    status_badge(ui, "approved", egui::Color32::from_rgb(46, 125, 50))
                }
                DesignStatus::Rejected => {
                    status_badge(ui, "rejected", egui::Color32::from_rgb(211, 47, 47))
                }
            }
            if ui.button("Approve").clicked() {
                if let Err(e) = store.set_design_status(design.id, DesignStatus::Approved) {
                    log::error!("Failed to approve design {}: {}", design.id, e);
                }
            }
            if ui.button("Reject").clicked() {
                if let Err(e) = store.set_design_status(design.id, DesignStatus::Rejected) {
                    log::error!("Failed to reject design {}: {}", design.id, e);
                }
            }
            if ui.button("Delete").clicked() {
                if let Err(e) = store.delete_design(design.id) {
                    log::error!("Failed to delete design {}: {}", design.id, e);
                }
            }
        });
        ui.label(
            egui::RichText::new(format!("submitted {}", design.created_at))
                .small()
                .weak(),
        );
        ui.separator();
    }
}

fn show_comments(ui: &mut egui::Ui, store: &mut dyn Store) {
    let comments = store.list_comments();
    if comments.is_empty() {
        ui.label("No comments.");
        return;
    }
    for comment in comments {
        ui.horizontal(|ui| {
            ui.label(format!(
                "#{} {}: \"{}\" ({}/5)",
                comment.id, comment.user, comment.comment, comment.rating
            ));
            match comment.status {
                CommentStatus::Pending => {
                    status_badge(ui, "pending", egui::Color32::from_rgb(245, 124, 0))
                }
                CommentStatus::Approved => {
                    status_badge(ui, "approved", egui::Color32::from_rgb(46, 125, 50))
                }
            }
            if ui.button("Approve").clicked() {
                if let Err(e) = store.set_comment_status(comment.id, CommentStatus::Approved) {
                    log::error!("Failed to approve comment {}: {}", comment.id, e);
                }
            }
            if ui.button("Delete").clicked() {
                if let Err(e) = store.delete_comment(comment.id) {
                    log::error!("Failed to delete comment {}: {}", comment.id, e);
                }
            }
        });
        ui.separator();
    }
}

fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn show_products(ui: &mut egui::Ui, state: &mut AdminState, store: &mut dyn Store) {
    for product in store.list_products() {
        ui.horizontal(|ui| {
            ui.label(format!(
                "#{} {} - {} ({} reviews)",
                product.id, product.name, product.price, product.review_count
            ));
            if ui.button("Delete").clicked() {
                if let Err(e) = store.delete_product(product.id) {
                    log::error!("Failed to delete product {}: {}", product.id, e);
                }
            }
        });
    }
    ui.separator();
    ui.label(egui::RichText::new("Add product").strong());

    let form = &mut state.product_form;
    egui::Grid::new("product-form").num_columns(2).show(ui, |ui| {
        ui.label("Name*");
        ui.text_edit_singleline(&mut form.name);
        ui.end_row();
        ui.label("Price*");
        ui.text_edit_singleline(&mut form.price);
        ui.end_row();
        ui.label("Description");
        ui.text_edit_singleline(&mut form.description);
        ui.end_row();
        ui.label("Colors (comma separated)");
        ui.text_edit_singleline(&mut form.colors);
        ui.end_row();
        ui.label("Sizes (comma separated)");
        ui.text_edit_singleline(&mut form.sizes);
        ui.end_row();
        ui.label("Shop link*");
        ui.text_edit_singleline(&mut form.shop_link);
        ui.end_row();
    });

    if ui.button("Add").clicked() {
        let price = form.price.trim().parse::<u64>();
        if form.name.trim().is_empty() || form.shop_link.trim().is_empty() || price.is_err() {
            form.error = Some("Name, numeric price and shop link are required.".to_string());
        } else {
            let product = NewProduct {
                name: form.name.trim().to_string(),
                price: price.unwrap_or(0),
                description: form.description.trim().to_string(),
                images: Vec::new(),
                colors: split_list(&form.colors),
                sizes: split_list(&form.sizes),
                shop_link: form.shop_link.trim().to_string(),
            };
            match store.add_product(product) {
                Ok(stored) => {
                    log::info!("Added product {}", stored.id);
                    *form = ProductForm::default();
                }
                Err(e) => {
                    log::error!("Failed to add product: {}", e);
                    form.error = Some(format!("Failed to add product: {e}"));
                }
            }
        }
    }
    if let Some(error) = &state.product_form.error {
        ui.colored_label(egui::Color32::from_rgb(211, 47, 47), error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(split_list("S, M ,L,,"), vec!["S", "M", "L"]);
        assert!(split_list("  ").is_empty());
    }
}

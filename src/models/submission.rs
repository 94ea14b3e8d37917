// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Persisted records owned by the storage collaborator.
//!
//! Submitted designs, catalog products and product comments, in the wire
//! shapes the review queue stores and the admin surface edits.

use crate::models::design::DesignItem;
use serde::{Deserialize, Serialize};

/// Requester details attached to a submitted design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub surname: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Garment selection captured at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TshirtSelection {
    /// Hex color code of the selected shirt color.
    pub color: String,
    pub size: String,
}

/// The design payload of a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignData {
    pub tshirt: TshirtSelection,
    pub items: Vec<DesignItem>,
    /// Rasterized preview of the design surface (`data:` URI).
    pub preview_image: String,
}

/// Review state of a submitted design. Only the admin surface moves a
/// design out of `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStatus {
    Pending,
    Approved,
    Rejected,
}

/// A design waiting in (or decided by) the review queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedDesign {
    pub id: u64,
    pub user_info: UserInfo,
    pub design_data: DesignData,
    pub created_at: String,
    pub status: DesignStatus,
}

/// A catalog product managed from the admin surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: u64,
    pub description: String,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub shop_link: String,
    pub rating: f32,
    pub review_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Pending,
    Approved,
}

/// A user review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub product_id: u64,
    pub user: String,
    pub comment: String,
    pub rating: u8,
    pub date: String,
    pub status: CommentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitted_design_uses_camel_case_keys() {
        let design = SubmittedDesign {
            id: 1,
            user_info: UserInfo {
                name: "Ada".to_string(),
                surname: "Lovelace".to_string(),
                address: "London".to_string(),
                message: None,
            },
            design_data: DesignData {
                tshirt: TshirtSelection {
                    color: "#ffffff".to_string(),
                    size: "M".to_string(),
                },
                items: Vec::new(),
                preview_image: String::new(),
            },
            created_at: "2026-01-01T00:00:00Z".to_string(),
            status: DesignStatus::Pending,
        };
        let value = serde_json::to_value(&design).unwrap();
        assert!(value.get("userInfo").is_some());
        assert!(value.get("designData").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["status"], "pending");
        assert!(value["designData"].get("previewImage").is_some());
        // Absent message is omitted entirely.
        assert!(value["userInfo"].get("message").is_none());
    }
}

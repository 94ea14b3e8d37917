// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Garment option tables.
//!
//! This module defines the fixed enumerated sets the designer offers:
//! six garment sides, seven shirt colors and five sizes. Selections are
//! independent; any combination is legal.

use serde::{Deserialize, Serialize};

/// One of the six anchored views of the garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentSide {
    Front,
    Back,
    InsideNeck,
    OutsideNeck,
    LeftSleeve,
    RightSleeve,
}

impl GarmentSide {
    pub const ALL: [GarmentSide; 6] = [
        GarmentSide::Front,
        GarmentSide::Back,
        GarmentSide::InsideNeck,
        GarmentSide::OutsideNeck,
        GarmentSide::LeftSleeve,
        GarmentSide::RightSleeve,
    ];

    /// Wire identifier used in exported documents.
    pub fn id(&self) -> &'static str {
        match self {
            GarmentSide::Front => "front",
            GarmentSide::Back => "back",
            GarmentSide::InsideNeck => "inside_neck",
            GarmentSide::OutsideNeck => "outside_neck",
            GarmentSide::LeftSleeve => "left_sleeve",
            GarmentSide::RightSleeve => "right_sleeve",
        }
    }

    /// Human-readable name shown in selectors and exports.
    pub fn label(&self) -> &'static str {
        match self {
            GarmentSide::Front => "Front",
            GarmentSide::Back => "Back",
            GarmentSide::InsideNeck => "Inside Neck",
            GarmentSide::OutsideNeck => "Outside Neck",
            GarmentSide::LeftSleeve => "Left Sleeve",
            GarmentSide::RightSleeve => "Right Sleeve",
        }
    }
}

/// One of the fixed palette of shirt colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentColor {
    White,
    Black,
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
}

impl GarmentColor {
    pub const ALL: [GarmentColor; 7] = [
        GarmentColor::White,
        GarmentColor::Black,
        GarmentColor::Red,
        GarmentColor::Blue,
        GarmentColor::Green,
        GarmentColor::Yellow,
        GarmentColor::Orange,
    ];

    /// Hex color code, as stored in exports and submissions.
    pub fn code(&self) -> &'static str {
        match self {
            GarmentColor::White => "#ffffff",
            GarmentColor::Black => "#000000",
            GarmentColor::Red => "#f44336",
            GarmentColor::Blue => "#2196f3",
            GarmentColor::Green => "#4caf50",
            GarmentColor::Yellow => "#ffeb3b",
            GarmentColor::Orange => "#ff9800",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GarmentColor::White => "White",
            GarmentColor::Black => "Black",
            GarmentColor::Red => "Red",
            GarmentColor::Blue => "Blue",
            GarmentColor::Green => "Green",
            GarmentColor::Yellow => "Yellow",
            GarmentColor::Orange => "Orange",
        }
    }
}

/// Shirt size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GarmentSize {
    S,
    M,
    L,
    XL,
    XXL,
}

impl GarmentSize {
    pub const ALL: [GarmentSize; 5] = [
        GarmentSize::S,
        GarmentSize::M,
        GarmentSize::L,
        GarmentSize::XL,
        GarmentSize::XXL,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GarmentSize::S => "S",
            GarmentSize::M => "M",
            GarmentSize::L => "L",
            GarmentSize::XL => "XL",
            GarmentSize::XXL => "XXL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_serializes_to_wire_id() {
        for side in GarmentSide::ALL {
            let json = serde_json::to_string(&side).unwrap();
            assert_eq!(json, format!("\"{}\"", side.id()));
        }
    }

    #[test]
    fn side_roundtrips_through_json() {
        let json = "\"inside_neck\"";
        let side: GarmentSide = serde_json::from_str(json).unwrap();
        assert_eq!(side, GarmentSide::InsideNeck);
    }

    #[test]
    fn color_codes_are_unique() {
        let mut codes: Vec<&str> = GarmentColor::ALL.iter().map(|c| c.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), GarmentColor::ALL.len());
    }
}

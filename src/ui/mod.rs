// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the design studio.

pub mod admin;
pub mod canvas;
pub mod preview;
pub mod selectors;
pub mod upload;

// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the design studio.

pub mod design;
pub mod garment;
pub mod submission;

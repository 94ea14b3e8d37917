// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Shared utility functions.

pub mod color;
pub mod geometry;

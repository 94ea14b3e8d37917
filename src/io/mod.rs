// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: design documents and bitmap capture.

pub mod export;
pub mod raster;

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for hwaes crates.
//!
//! ## License
//!
//! GPL-3.0-only

#[cfg(test)]
mod tests;

mod bytes;

pub use bytes::{flip_bit, hex_to_bytes, is_zeroized};

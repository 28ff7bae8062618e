// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hwaes_cipher
//!
//! Modes of operation over a hardware AES capability.
//!
//! The capability ([`CipherBlock`]) owns the key schedules and the
//! per-operation state (IV, additional data, last tag). The mode wrappers
//! borrow it mutably for their whole lifetime:
//!
//! - [`Cbc`]: chained bulk encryption with a direction fixed at construction
//! - [`Gcm`]: AEAD with a fixed 12-byte nonce and a 16-byte tag
//! - [`Xts`]: single-sector tweakable encryption
//!
//! ## Error model
//!
//! Recoverable failures are reported through [`CipherError`]. Length mismatches
//! on IVs, tweaks and nonces are programming errors and panic.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod cbc;
mod consts;
mod error;
mod gcm;
mod mode;
mod support;
mod traits;
mod xts;

pub use cbc::Cbc;
pub use consts::{
    BLOCK_SIZE, GCM_MAX_PLAINTEXT_SIZE, GCM_STANDARD_NONCE_SIZE, GCM_TAG_SIZE,
};
pub use error::CipherError;
pub use gcm::Gcm;
pub use mode::{Direction, Mode};
pub use traits::{Aead, BlockMode, CipherBlock};
pub use xts::Xts;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hwaes
//!
//! Hardware-accelerated AES with CBC, GCM and XTS selected by key length.
//!
//! [`new_cipher`] probes the CPU, inspects the key length and returns an
//! [`AesCipher`]. There is no software fallback: without AES-NI/PCLMULQDQ
//! (x86) or the ARMv8 crypto extensions (aarch64) construction fails with
//! [`CipherError::HardwareUnsupported`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use hwaes::{Aead, Gcm, new_cipher};
//!
//! let mut cipher = new_cipher(&[0u8; 16])?;
//! let mut gcm = Gcm::new(&mut cipher)?;
//!
//! let mut sealed = Vec::new();
//! gcm.seal(&mut sealed, &[0u8; 12], b"hello", b"header")?;
//!
//! let mut opened = Vec::new();
//! gcm.open(&mut opened, &[0u8; 12], &sealed, b"header")?;
//! assert_eq!(opened, b"hello");
//! # Ok::<(), hwaes::CipherError>(())
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod accel;
mod cipher;
mod factory;
mod feature_detector;
mod hardware;
mod variants;

pub use cipher::AesCipher;
pub use factory::new_cipher;
pub use hardware::is_supported;
pub use variants::{Aes128Cipher, Aes192Cipher, Aes256Cipher, Aes512Cipher};

pub use hwaes_cipher::{
    Aead, BLOCK_SIZE, BlockMode, Cbc, CipherBlock, CipherError, Direction, GCM_MAX_PLAINTEXT_SIZE,
    GCM_STANDARD_NONCE_SIZE, GCM_TAG_SIZE, Gcm, Mode, Xts,
};

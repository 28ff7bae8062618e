// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The four key-size variants. Each one stores only the schedules its legal
//! modes need.

mod aes128;
mod aes192;
mod aes256;
mod aes512;
mod gcm_state;

pub use aes128::Aes128Cipher;
pub use aes192::Aes192Cipher;
pub use aes256::Aes256Cipher;
pub use aes512::Aes512Cipher;

use hwaes_cipher::BLOCK_SIZE;
use zeroize::Zeroize;

/// Copies `iv` into the front of `current` and zero-fills the rest.
fn bind_iv(current: &mut [u8; BLOCK_SIZE], iv: &[u8]) {
    assert!(iv.len() <= BLOCK_SIZE, "IV longer than block size");

    current.zeroize();
    current[..iv.len()].copy_from_slice(iv);
}

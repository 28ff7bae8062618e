// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Acceleration boundary.
//!
//! Key schedules and the CBC, GCM and XTS primitives, built on the RustCrypto
//! `aes` backends (AES-NI/PCLMULQDQ on x86, crypto extensions on aarch64). The
//! mode wrappers never see these types; the variants hold them.

mod cbc;
mod gcm;
mod xts;

pub(crate) use cbc::CbcSchedule;
pub(crate) use gcm::GcmContext;
pub(crate) use xts::XtsSchedule;

use hwaes_cipher::{BLOCK_SIZE, CipherError};

fn ensure_dst(dst: &[u8], src: &[u8]) -> Result<(), CipherError> {
    if dst.len() < src.len() {
        return Err(CipherError::BufferTooSmall {
            needed: src.len(),
            actual: dst.len(),
        });
    }

    Ok(())
}

fn ensure_block_aligned(len: usize) -> Result<(), CipherError> {
    if len % BLOCK_SIZE != 0 {
        return Err(CipherError::NotBlockAligned(len));
    }

    Ok(())
}

fn ensure_full_block(len: usize) -> Result<(), CipherError> {
    if len < BLOCK_SIZE {
        return Err(CipherError::BufferTooSmall {
            needed: BLOCK_SIZE,
            actual: len,
        });
    }

    Ok(())
}

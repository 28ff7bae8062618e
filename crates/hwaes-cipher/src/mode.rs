// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// Mode tag passed to [`CipherBlock::encrypt`](crate::CipherBlock::encrypt) and
/// [`CipherBlock::decrypt`](crate::CipherBlock::decrypt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// AES-XTS sector encryption.
    Xts,
    /// AES-GCM authenticated encryption.
    Gcm,
    /// AES-CBC chained encryption.
    Cbc,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Xts => "XTS",
            Mode::Gcm => "GCM",
            Mode::Cbc => "CBC",
        };
        f.write_str(name)
    }
}

/// Direction remembered by a [`Cbc`](crate::Cbc) wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `crypt_blocks` encrypts.
    Encrypt,
    /// `crypt_blocks` decrypts.
    Decrypt,
}

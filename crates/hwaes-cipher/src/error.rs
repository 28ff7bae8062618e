// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types shared by the capability and the mode wrappers.

use crate::mode::Mode;

/// Errors that can occur while constructing or using a cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// Key length is not 16, 24, 32 or 64 bytes.
    #[error("unsupported key size: {0} bytes")]
    UnsupportedKeySize(usize),

    /// The CPU lacks the instruction extensions required for acceleration.
    #[error("hardware AES acceleration not supported")]
    HardwareUnsupported,

    /// The capability does not implement the requested mode.
    #[error("invalid mode: {0} not supported by this key")]
    InvalidMode(Mode),

    /// Tag verification failed. Carries no detail about which byte differed.
    #[error("message authentication failed")]
    AuthenticationFailed,

    /// A source or destination buffer is shorter than required.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall {
        /// Minimum length required.
        needed: usize,
        /// Length provided.
        actual: usize,
    },

    /// CBC input is not a whole number of blocks.
    #[error("input length {0} is not a multiple of the block size")]
    NotBlockAligned(usize),

    /// GCM was requested with a nonce size other than 12 bytes.
    #[error("non standard nonce size {0} not implemented")]
    NonceSizeUnsupported(usize),

    /// The mode operates on single sectors and has no bulk chained form.
    #[error("bulk block crypt not supported in {0} mode")]
    CryptBlocksUnsupported(Mode),
}

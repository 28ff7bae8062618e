// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// The only nonce size accepted by [`Gcm`](crate::Gcm).
pub const GCM_STANDARD_NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes.
pub const GCM_TAG_SIZE: usize = 16;

/// Largest plaintext a single GCM invocation may process: (2^32 - 2) blocks.
pub const GCM_MAX_PLAINTEXT_SIZE: u64 = ((1 << 32) - 2) * BLOCK_SIZE as u64;

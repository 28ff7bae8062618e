// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for code written against [`CipherBlock`](crate::CipherBlock).

mod cipher_block_mock;

pub use cipher_block_mock::{CipherBlockMock, CipherBlockMockBehaviour, POISON_BYTE};

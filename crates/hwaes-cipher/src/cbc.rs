// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CBC mode wrapper.

use crate::error::CipherError;
use crate::mode::{Direction, Mode};
use crate::traits::{BlockMode, CipherBlock};

/// CBC over a borrowed capability, with a direction fixed at construction.
///
/// Chaining runs within one call. The capability does not advance the IV
/// between calls, so a message split across calls needs `set_iv` with the last
/// ciphertext block in between.
pub struct Cbc<'a, B: CipherBlock + ?Sized> {
    block: &'a mut B,
    direction: Direction,
}

impl<'a, B: CipherBlock + ?Sized> Cbc<'a, B> {
    /// Binds `iv` on `block` and returns an encrypting wrapper.
    ///
    /// # Panics
    ///
    /// Panics if `iv.len()` differs from the block size.
    pub fn new_encrypter(block: &'a mut B, iv: &[u8]) -> Self {
        Self::with_direction(block, iv, Direction::Encrypt)
    }

    /// Binds `iv` on `block` and returns a decrypting wrapper.
    ///
    /// # Panics
    ///
    /// Panics if `iv.len()` differs from the block size.
    pub fn new_decrypter(block: &'a mut B, iv: &[u8]) -> Self {
        Self::with_direction(block, iv, Direction::Decrypt)
    }

    fn with_direction(block: &'a mut B, iv: &[u8], direction: Direction) -> Self {
        assert_eq!(
            iv.len(),
            block.block_size(),
            "IV length must equal block size"
        );
        block.set_iv(iv);

        Self { block, direction }
    }

    /// Direction used by `crypt_blocks`.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<B: CipherBlock + ?Sized> BlockMode for Cbc<'_, B> {
    fn block_size(&self) -> usize {
        self.block.block_size()
    }

    /// # Panics
    ///
    /// Panics if `iv.len()` differs from the block size.
    fn set_iv(&mut self, iv: &[u8]) {
        assert_eq!(
            iv.len(),
            self.block.block_size(),
            "IV length must equal block size"
        );
        self.block.set_iv(iv);
    }

    fn encrypt(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CipherError> {
        self.block.encrypt(dst, src, Mode::Cbc)
    }

    fn decrypt(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CipherError> {
        self.block.decrypt(dst, src, Mode::Cbc)
    }

    fn crypt_blocks(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CipherError> {
        match self.direction {
            Direction::Encrypt => self.block.encrypt(dst, src, Mode::Cbc),
            Direction::Decrypt => self.block.decrypt(dst, src, Mode::Cbc),
        }
    }

    fn crypt_blocks_in_place(&mut self, buf: &mut [u8]) -> Result<(), CipherError> {
        match self.direction {
            Direction::Encrypt => self.block.encrypt_in_place(buf, Mode::Cbc),
            Direction::Decrypt => self.block.decrypt_in_place(buf, Mode::Cbc),
        }
    }
}

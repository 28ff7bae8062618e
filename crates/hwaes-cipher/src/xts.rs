// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! XTS mode wrapper.

use crate::consts::BLOCK_SIZE;
use crate::error::CipherError;
use crate::mode::Mode;
use crate::traits::{BlockMode, CipherBlock};

/// AES-XTS over a borrowed capability.
///
/// Each call encrypts or decrypts one sector with the bound tweak. There is no
/// chaining between calls; bind a new tweak per sector with
/// [`set_iv`](BlockMode::set_iv) or [`set_sector`](Xts::set_sector).
pub struct Xts<'a, B: CipherBlock + ?Sized> {
    block: &'a mut B,
}

impl<'a, B: CipherBlock + ?Sized> Xts<'a, B> {
    /// Wraps `block`. The tweak currently bound on `block` stays in effect.
    pub fn new(block: &'a mut B) -> Self {
        Self { block }
    }

    /// Binds the IEEE 1619 tweak for `sector`: its index as 16 little-endian
    /// bytes.
    pub fn set_sector(&mut self, sector: u128) {
        self.block.set_iv(&sector.to_le_bytes());
    }

    /// Encrypts a sector in place.
    pub fn encrypt_in_place(&mut self, buf: &mut [u8]) -> Result<(), CipherError> {
        Self::check_sector(buf.len())?;
        self.block.encrypt_in_place(buf, Mode::Xts)
    }

    /// Decrypts a sector in place.
    pub fn decrypt_in_place(&mut self, buf: &mut [u8]) -> Result<(), CipherError> {
        Self::check_sector(buf.len())?;
        self.block.decrypt_in_place(buf, Mode::Xts)
    }

    fn check_sector(len: usize) -> Result<(), CipherError> {
        if len < BLOCK_SIZE {
            return Err(CipherError::BufferTooSmall {
                needed: BLOCK_SIZE,
                actual: len,
            });
        }

        Ok(())
    }

    fn validate(&self, dst: &[u8], src: &[u8]) -> Result<(), CipherError> {
        Self::check_sector(dst.len())?;

        if dst.len() < src.len() {
            return Err(CipherError::BufferTooSmall {
                needed: src.len(),
                actual: dst.len(),
            });
        }

        Ok(())
    }
}

impl<B: CipherBlock + ?Sized> BlockMode for Xts<'_, B> {
    fn block_size(&self) -> usize {
        1
    }

    /// # Panics
    ///
    /// Panics if `iv` is not 16 bytes.
    fn set_iv(&mut self, iv: &[u8]) {
        assert_eq!(
            iv.len(),
            self.block.block_size(),
            "IV length must equal cipher block size"
        );
        self.block.set_iv(iv);
    }

    fn encrypt(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CipherError> {
        self.validate(dst, src)?;
        self.block.encrypt(dst, src, Mode::Xts)
    }

    fn decrypt(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CipherError> {
        self.validate(dst, src)?;
        self.block.decrypt(dst, src, Mode::Xts)
    }

    fn crypt_blocks(&mut self, _dst: &mut [u8], _src: &[u8]) -> Result<(), CipherError> {
        Err(CipherError::CryptBlocksUnsupported(Mode::Xts))
    }

    fn crypt_blocks_in_place(&mut self, _buf: &mut [u8]) -> Result<(), CipherError> {
        Err(CipherError::CryptBlocksUnsupported(Mode::Xts))
    }
}

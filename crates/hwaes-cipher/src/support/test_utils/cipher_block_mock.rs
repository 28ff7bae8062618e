// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::consts::{BLOCK_SIZE, GCM_TAG_SIZE};
use crate::error::CipherError;
use crate::mode::Mode;
use crate::traits::CipherBlock;

/// Byte written over `dst` when an injected failure fires, so callers can
/// check that partial output gets wiped.
pub const POISON_BYTE: u8 = 0xAA;

/// Configurable behaviour for [`CipherBlockMock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherBlockMockBehaviour {
    /// Normal operation.
    None,
    /// Fail the encrypt call at this index (0-indexed).
    FailEncryptAt(usize),
    /// Fail the decrypt call at this index (0-indexed).
    FailDecryptAt(usize),
    /// Flip the first byte of every tag recomputed by a GCM decrypt.
    CorruptTag,
}

/// Keyless stand-in for a hardware capability.
///
/// "Encryption" XORs a keystream derived from the bound IV, and the GCM tag
/// folds nonce, additional data and ciphertext together, so any single bit
/// flip in one of them changes the tag. Nothing here is secure; it only lets
/// the mode wrappers be exercised without AES hardware.
pub struct CipherBlockMock {
    behaviour: CipherBlockMockBehaviour,
    modes: Vec<Mode>,
    iv: [u8; BLOCK_SIZE],
    additional_data: Vec<u8>,
    auth_tag: [u8; GCM_TAG_SIZE],
    encrypt_count: Cell<usize>,
    decrypt_count: Cell<usize>,
}

impl CipherBlockMock {
    /// Creates a mock supporting every mode.
    pub fn new(behaviour: CipherBlockMockBehaviour) -> Self {
        Self::with_modes(behaviour, &[Mode::Xts, Mode::Gcm, Mode::Cbc])
    }

    /// Creates a mock supporting only `modes`.
    pub fn with_modes(behaviour: CipherBlockMockBehaviour, modes: &[Mode]) -> Self {
        Self {
            behaviour,
            modes: modes.to_vec(),
            iv: [0u8; BLOCK_SIZE],
            additional_data: Vec::new(),
            auth_tag: [0u8; GCM_TAG_SIZE],
            encrypt_count: Cell::new(0),
            decrypt_count: Cell::new(0),
        }
    }

    /// Changes the mock behaviour at runtime.
    pub fn change_behaviour(&mut self, behaviour: CipherBlockMockBehaviour) {
        self.behaviour = behaviour;
    }

    /// Currently bound IV.
    pub fn iv(&self) -> &[u8; BLOCK_SIZE] {
        &self.iv
    }

    /// Currently bound additional data.
    pub fn additional_data(&self) -> &[u8] {
        &self.additional_data
    }

    /// Number of encrypt calls so far, in place or not.
    pub fn encrypt_count(&self) -> usize {
        self.encrypt_count.get()
    }

    /// Number of decrypt calls so far, in place or not.
    pub fn decrypt_count(&self) -> usize {
        self.decrypt_count.get()
    }

    fn apply_keystream(&self, dst: &mut [u8], src: &[u8]) {
        for (i, (out, byte)) in dst.iter_mut().zip(src).enumerate() {
            *out = byte ^ self.iv[i % BLOCK_SIZE] ^ (i as u8) ^ 0x5A;
        }
    }

    fn compute_tag(&self, ciphertext: &[u8]) -> [u8; GCM_TAG_SIZE] {
        let mut tag = self.iv;

        for (i, byte) in self.additional_data.iter().enumerate() {
            tag[i % GCM_TAG_SIZE] ^= byte.rotate_left(3);
        }
        for (i, byte) in ciphertext.iter().enumerate() {
            tag[i % GCM_TAG_SIZE] ^= *byte;
        }

        tag[0] ^= self.additional_data.len() as u8;
        tag[1] ^= ciphertext.len() as u8;

        tag
    }

    fn check(&self, dst: &[u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        if !self.supports(mode) {
            return Err(CipherError::InvalidMode(mode));
        }

        if mode == Mode::Cbc && src.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::NotBlockAligned(src.len()));
        }

        if mode == Mode::Xts && src.len() < BLOCK_SIZE {
            return Err(CipherError::BufferTooSmall {
                needed: BLOCK_SIZE,
                actual: src.len(),
            });
        }

        if dst.len() < src.len() {
            return Err(CipherError::BufferTooSmall {
                needed: src.len(),
                actual: dst.len(),
            });
        }

        Ok(())
    }
}

impl CipherBlock for CipherBlockMock {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn supports(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }

    fn set_iv(&mut self, iv: &[u8]) {
        assert!(iv.len() <= BLOCK_SIZE, "IV longer than block size");

        self.iv = [0u8; BLOCK_SIZE];
        self.iv[..iv.len()].copy_from_slice(iv);
    }

    fn gcm_add_additional_data(&mut self, additional_data: &[u8]) {
        self.additional_data = additional_data.to_vec();
    }

    fn gcm_auth_tag(&self) -> Option<&[u8; GCM_TAG_SIZE]> {
        self.supports(Mode::Gcm).then_some(&self.auth_tag)
    }

    fn encrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        let current = self.encrypt_count.get();
        self.encrypt_count.set(current + 1);

        self.check(dst, src, mode)?;

        if self.behaviour == CipherBlockMockBehaviour::FailEncryptAt(current) {
            dst.fill(POISON_BYTE);
            return Err(CipherError::InvalidMode(mode));
        }

        self.apply_keystream(dst, src);

        if mode == Mode::Gcm {
            self.auth_tag = self.compute_tag(&dst[..src.len()]);
        }

        Ok(())
    }

    fn decrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        let current = self.decrypt_count.get();
        self.decrypt_count.set(current + 1);

        self.check(dst, src, mode)?;

        if self.behaviour == CipherBlockMockBehaviour::FailDecryptAt(current) {
            dst.fill(POISON_BYTE);
            return Err(CipherError::InvalidMode(mode));
        }

        if mode == Mode::Gcm {
            self.auth_tag = self.compute_tag(src);

            if self.behaviour == CipherBlockMockBehaviour::CorruptTag {
                self.auth_tag[0] ^= 0xFF;
            }
        }

        self.apply_keystream(dst, src);

        Ok(())
    }

    fn encrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError> {
        let src = buf.to_vec();
        self.encrypt(buf, &src, mode)
    }

    fn decrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError> {
        let src = buf.to_vec();
        self.decrypt(buf, &src, mode)
    }
}

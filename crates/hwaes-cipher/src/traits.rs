// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capability and mode-of-operation trait definitions.

use crate::consts::GCM_TAG_SIZE;
use crate::error::CipherError;
use crate::mode::Mode;

/// A keyed AES capability.
///
/// Implementations own the expanded key schedules plus the mutable
/// per-operation state: the current IV/nonce/tweak, the GCM additional data and
/// the most recent authentication tag. Every call that touches that state takes
/// `&mut self`, so one instance serves one stream at a time.
pub trait CipherBlock {
    /// Cipher block size in bytes.
    fn block_size(&self) -> usize;

    /// Whether `mode` is legal for this key.
    fn supports(&self, mode: Mode) -> bool;

    /// Binds the IV (CBC), nonce (GCM, first 12 bytes) or tweak (XTS).
    ///
    /// # Panics
    ///
    /// Panics if `iv` is longer than [`block_size`](Self::block_size).
    fn set_iv(&mut self, iv: &[u8]);

    /// Binds the additional authenticated data for the next GCM operation.
    fn gcm_add_additional_data(&mut self, additional_data: &[u8]);

    /// Tag produced by the last GCM operation, `None` when the key has no GCM
    /// support.
    fn gcm_auth_tag(&self) -> Option<&[u8; GCM_TAG_SIZE]>;

    /// Encrypts `src` into the front of `dst` using `mode`.
    fn encrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError>;

    /// Decrypts `src` into the front of `dst` using `mode`.
    fn decrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError>;

    /// Encrypts `buf` in place using `mode`.
    fn encrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError>;

    /// Decrypts `buf` in place using `mode`.
    fn decrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError>;
}

/// A block cipher running in a block-based mode (CBC, XTS).
pub trait BlockMode {
    /// Granularity of the mode in bytes.
    fn block_size(&self) -> usize;

    /// Re-binds the IV or tweak.
    fn set_iv(&mut self, iv: &[u8]);

    /// Encrypts `src` into `dst`.
    fn encrypt(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CipherError>;

    /// Decrypts `src` into `dst`.
    fn decrypt(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CipherError>;

    /// Encrypts or decrypts, depending on the direction bound at construction.
    fn crypt_blocks(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CipherError>;

    /// Same as [`crypt_blocks`](Self::crypt_blocks) with source and destination
    /// being the same buffer.
    fn crypt_blocks_in_place(&mut self, buf: &mut [u8]) -> Result<(), CipherError>;
}

/// Authenticated encryption with associated data.
pub trait Aead {
    /// Size of the nonce passed to `seal` and `open`.
    fn nonce_size(&self) -> usize;

    /// Difference between ciphertext and plaintext lengths.
    fn overhead(&self) -> usize;

    /// Encrypts and authenticates `plaintext`, authenticates `additional_data`,
    /// and appends `ciphertext || tag` to `dst`.
    fn seal(
        &mut self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        plaintext: &[u8],
        additional_data: &[u8],
    ) -> Result<(), CipherError>;

    /// Verifies and decrypts `ciphertext` (which ends with the tag) and appends
    /// the plaintext to `dst`.
    ///
    /// On failure `dst` is left at its original length; bytes written past it
    /// are zeroized first.
    fn open(
        &mut self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        additional_data: &[u8],
    ) -> Result<(), CipherError>;
}

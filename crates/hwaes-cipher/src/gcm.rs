// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GCM AEAD wrapper.

use subtle::ConstantTimeEq;

use crate::consts::{GCM_MAX_PLAINTEXT_SIZE, GCM_STANDARD_NONCE_SIZE, GCM_TAG_SIZE};
use crate::error::CipherError;
use crate::mode::Mode;
use crate::support::{slice_for_append, wipe_appended};
use crate::traits::{Aead, CipherBlock};

/// AES-GCM over a borrowed capability.
///
/// Nonces are 12 bytes and tags 16 bytes. Every call re-binds the nonce and
/// the additional data on the capability, so no state carries over between
/// messages.
pub struct Gcm<'a, B: CipherBlock + ?Sized> {
    block: &'a mut B,
    nonce_size: usize,
}

impl<'a, B: CipherBlock + ?Sized> Gcm<'a, B> {
    /// Wraps `block` with the standard 12-byte nonce.
    ///
    /// Fails with [`CipherError::InvalidMode`] when `block` has no GCM support.
    pub fn new(block: &'a mut B) -> Result<Self, CipherError> {
        Self::with_nonce_size(block, GCM_STANDARD_NONCE_SIZE)
    }

    /// Wraps `block` with an explicit nonce size. Only 12 is accepted.
    pub fn with_nonce_size(block: &'a mut B, nonce_size: usize) -> Result<Self, CipherError> {
        if nonce_size != GCM_STANDARD_NONCE_SIZE {
            return Err(CipherError::NonceSizeUnsupported(nonce_size));
        }

        if !block.supports(Mode::Gcm) {
            return Err(CipherError::InvalidMode(Mode::Gcm));
        }

        Ok(Self { block, nonce_size })
    }

    fn seal_into(
        &mut self,
        out: &mut [u8],
        nonce: &[u8],
        plaintext: &[u8],
        additional_data: &[u8],
    ) -> Result<(), CipherError> {
        let (ciphertext, tag) = out.split_at_mut(plaintext.len());

        self.block.set_iv(nonce);
        self.block.gcm_add_additional_data(additional_data);
        self.block.encrypt(ciphertext, plaintext, Mode::Gcm)?;

        let computed = self
            .block
            .gcm_auth_tag()
            .ok_or(CipherError::InvalidMode(Mode::Gcm))?;
        tag.copy_from_slice(computed);

        Ok(())
    }

    fn open_into(
        &mut self,
        out: &mut [u8],
        nonce: &[u8],
        ciphertext: &[u8],
        tag: &[u8],
        additional_data: &[u8],
    ) -> Result<(), CipherError> {
        self.block.set_iv(nonce);
        self.block.gcm_add_additional_data(additional_data);
        self.block.decrypt(out, ciphertext, Mode::Gcm)?;

        let computed = self
            .block
            .gcm_auth_tag()
            .ok_or(CipherError::AuthenticationFailed)?;

        if bool::from(computed[..].ct_eq(tag)) {
            Ok(())
        } else {
            Err(CipherError::AuthenticationFailed)
        }
    }

    fn check_nonce(&self, nonce: &[u8]) {
        assert_eq!(
            nonce.len(),
            self.nonce_size,
            "incorrect nonce length given to GCM"
        );
    }
}

impl<B: CipherBlock + ?Sized> Aead for Gcm<'_, B> {
    fn nonce_size(&self) -> usize {
        self.nonce_size
    }

    fn overhead(&self) -> usize {
        GCM_TAG_SIZE
    }

    /// # Panics
    ///
    /// Panics if `nonce` is not 12 bytes or `plaintext` exceeds
    /// [`GCM_MAX_PLAINTEXT_SIZE`].
    fn seal(
        &mut self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        plaintext: &[u8],
        additional_data: &[u8],
    ) -> Result<(), CipherError> {
        self.check_nonce(nonce);
        assert!(
            plaintext.len() as u64 <= GCM_MAX_PLAINTEXT_SIZE,
            "message too large for GCM"
        );

        let start = slice_for_append(dst, plaintext.len() + GCM_TAG_SIZE);
        let result = self.seal_into(&mut dst[start..], nonce, plaintext, additional_data);

        if result.is_err() {
            wipe_appended(dst, start);
        }

        result
    }

    /// # Panics
    ///
    /// Panics if `nonce` is not 12 bytes.
    fn open(
        &mut self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        additional_data: &[u8],
    ) -> Result<(), CipherError> {
        self.check_nonce(nonce);

        if ciphertext.len() < GCM_TAG_SIZE
            || ciphertext.len() as u64 > GCM_MAX_PLAINTEXT_SIZE + GCM_TAG_SIZE as u64
        {
            return Err(CipherError::AuthenticationFailed);
        }

        let (body, tag) = ciphertext.split_at(ciphertext.len() - GCM_TAG_SIZE);

        let start = slice_for_append(dst, body.len());
        let result = self.open_into(&mut dst[start..], nonce, body, tag, additional_data);

        if result.is_err() {
            wipe_appended(dst, start);
        }

        result
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes::cipher::consts::U16;
use aes::cipher::{BlockCipher, BlockEncrypt, BlockSizeUser};
use hwaes_cipher::{BLOCK_SIZE, CipherError, GCM_TAG_SIZE};
use zeroize::Zeroize;

use crate::accel::GcmContext;

/// Per-key GCM state: the precomputed context plus the additional data bound
/// for the next call and the tag left by the last one.
pub(crate) struct GcmState<C> {
    context: GcmContext<C>,
    additional_data: Vec<u8>,
    auth_tag: [u8; GCM_TAG_SIZE],
}

impl<C> GcmState<C>
where
    C: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockEncrypt,
{
    pub fn new(cipher: C) -> Self {
        Self {
            context: GcmContext::precompute(cipher),
            additional_data: Vec::new(),
            auth_tag: [0u8; GCM_TAG_SIZE],
        }
    }

    pub fn set_additional_data(&mut self, additional_data: &[u8]) {
        self.additional_data.zeroize();
        self.additional_data.extend_from_slice(additional_data);
    }

    pub fn auth_tag(&self) -> &[u8; GCM_TAG_SIZE] {
        &self.auth_tag
    }

    pub fn encrypt(
        &mut self,
        iv: &[u8; BLOCK_SIZE],
        dst: &mut [u8],
        src: &[u8],
    ) -> Result<(), CipherError> {
        self.auth_tag = self
            .context
            .encrypt(iv, &self.additional_data, dst, src)?;

        Ok(())
    }

    pub fn encrypt_in_place(&mut self, iv: &[u8; BLOCK_SIZE], buf: &mut [u8]) {
        self.auth_tag = self
            .context
            .encrypt_in_place(iv, &self.additional_data, buf);
    }

    pub fn decrypt(
        &mut self,
        iv: &[u8; BLOCK_SIZE],
        dst: &mut [u8],
        src: &[u8],
    ) -> Result<(), CipherError> {
        self.auth_tag.zeroize();
        self.auth_tag = self
            .context
            .decrypt(iv, &self.additional_data, dst, src)?;

        Ok(())
    }

    pub fn decrypt_in_place(&mut self, iv: &[u8; BLOCK_SIZE], buf: &mut [u8]) {
        self.auth_tag.zeroize();
        self.auth_tag = self
            .context
            .decrypt_in_place(iv, &self.additional_data, buf);
    }
}

impl<C> Drop for GcmState<C> {
    fn drop(&mut self) {
        self.additional_data.zeroize();
        self.auth_tag.zeroize();
    }
}

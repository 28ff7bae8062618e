// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes::Block;
use aes::cipher::consts::U16;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockCipher, BlockEncrypt, BlockSizeUser, InnerIvInit, StreamCipherCore};
use ghash::GHash;
use ghash::universal_hash::{KeyInit, UniversalHash};
use hwaes_cipher::{BLOCK_SIZE, CipherError, GCM_STANDARD_NONCE_SIZE, GCM_TAG_SIZE};
use zeroize::Zeroize;

use super::ensure_dst;

type Ctr32BE<'a, C> = ctr::CtrCore<&'a C, ctr::flavors::Ctr32BE>;

/// GCM state derived from one key: the block cipher and the hash subkey
/// `H = E_K(0^128)`.
pub(crate) struct GcmContext<C> {
    cipher: C,
    hash_key: [u8; 16],
}

impl<C> GcmContext<C>
where
    C: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockEncrypt,
{
    pub fn precompute(cipher: C) -> Self {
        let mut context = Self {
            cipher,
            hash_key: [0u8; 16],
        };
        context
            .cipher
            .encrypt_block(GenericArray::from_mut_slice(&mut context.hash_key));

        context
    }

    /// Encrypts `src` into `dst` and returns the tag over `additional_data`
    /// and the ciphertext.
    pub fn encrypt(
        &self,
        iv: &[u8; BLOCK_SIZE],
        additional_data: &[u8],
        dst: &mut [u8],
        src: &[u8],
    ) -> Result<[u8; GCM_TAG_SIZE], CipherError> {
        ensure_dst(dst, src)?;

        let output = &mut dst[..src.len()];
        output.copy_from_slice(src);

        Ok(self.encrypt_in_place(iv, additional_data, output))
    }

    pub fn encrypt_in_place(
        &self,
        iv: &[u8; BLOCK_SIZE],
        additional_data: &[u8],
        buf: &mut [u8],
    ) -> [u8; GCM_TAG_SIZE] {
        let (ctr, tag_mask) = self.init_ctr(iv);
        ctr.apply_keystream_partial(buf.into());

        self.compute_tag(&tag_mask, additional_data, buf)
    }

    /// Decrypts `src` into `dst` and returns the tag recomputed over
    /// `additional_data` and `src`. The caller compares it.
    pub fn decrypt(
        &self,
        iv: &[u8; BLOCK_SIZE],
        additional_data: &[u8],
        dst: &mut [u8],
        src: &[u8],
    ) -> Result<[u8; GCM_TAG_SIZE], CipherError> {
        ensure_dst(dst, src)?;

        let output = &mut dst[..src.len()];
        output.copy_from_slice(src);

        Ok(self.decrypt_in_place(iv, additional_data, output))
    }

    pub fn decrypt_in_place(
        &self,
        iv: &[u8; BLOCK_SIZE],
        additional_data: &[u8],
        buf: &mut [u8],
    ) -> [u8; GCM_TAG_SIZE] {
        let (ctr, tag_mask) = self.init_ctr(iv);
        let tag = self.compute_tag(&tag_mask, additional_data, buf);
        ctr.apply_keystream_partial(buf.into());

        tag
    }

    // J0 = nonce || 0^31 || 1, the nonce being the first 12 bytes of the bound
    // IV. The first keystream block masks the tag; the payload starts at
    // inc32(J0).
    fn init_ctr(&self, iv: &[u8; BLOCK_SIZE]) -> (Ctr32BE<'_, C>, Block) {
        let mut j0 = Block::default();
        j0[..GCM_STANDARD_NONCE_SIZE].copy_from_slice(&iv[..GCM_STANDARD_NONCE_SIZE]);
        j0[15] = 1;

        let mut ctr = Ctr32BE::inner_iv_init(&self.cipher, &j0);
        let mut tag_mask = Block::default();
        ctr.write_keystream_block(&mut tag_mask);

        (ctr, tag_mask)
    }

    fn compute_tag(
        &self,
        tag_mask: &Block,
        additional_data: &[u8],
        ciphertext: &[u8],
    ) -> [u8; GCM_TAG_SIZE] {
        let mut ghash = GHash::new(GenericArray::from_slice(&self.hash_key));
        ghash.update_padded(additional_data);
        ghash.update_padded(ciphertext);

        let additional_data_bits = (additional_data.len() as u64) * 8;
        let ciphertext_bits = (ciphertext.len() as u64) * 8;

        let mut lengths = Block::default();
        lengths[..8].copy_from_slice(&additional_data_bits.to_be_bytes());
        lengths[8..].copy_from_slice(&ciphertext_bits.to_be_bytes());
        ghash.update(&[lengths]);

        let digest = ghash.finalize();

        let mut tag = [0u8; GCM_TAG_SIZE];
        for ((out, hashed), mask) in tag.iter_mut().zip(digest.iter()).zip(tag_mask.iter()) {
            *out = hashed ^ mask;
        }

        tag
    }
}

impl<C> Drop for GcmContext<C> {
    fn drop(&mut self) {
        self.hash_key.zeroize();
    }
}

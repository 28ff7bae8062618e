// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes::cipher::consts::U16;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{
    BlockCipher, BlockDecrypt, BlockDecryptMut, BlockEncrypt, BlockEncryptMut, BlockSizeUser,
    InnerIvInit, KeyInit,
};
use hwaes_cipher::{BLOCK_SIZE, CipherError};
use zeroize::Zeroizing;

use super::{ensure_block_aligned, ensure_dst};

/// Expanded encrypt and decrypt schedules for CBC.
///
/// Each call chains from the IV it is given; nothing is carried between calls.
pub(crate) struct CbcSchedule<E, D> {
    enc: E,
    dec: D,
}

impl<E, D> CbcSchedule<E, D>
where
    E: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockEncrypt + KeyInit + Clone,
    D: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockDecrypt + KeyInit + Clone,
{
    pub fn expand(key: &[u8]) -> Result<Self, CipherError> {
        let enc = E::new_from_slice(key).map_err(|_| CipherError::UnsupportedKeySize(key.len()))?;
        let dec = D::new_from_slice(key).map_err(|_| CipherError::UnsupportedKeySize(key.len()))?;

        Ok(Self { enc, dec })
    }

    /// Encrypt schedule, shared with GCM on keys that support both modes.
    pub fn encrypt_schedule(&self) -> &E {
        &self.enc
    }

    pub fn encrypt(
        &self,
        iv: &[u8; BLOCK_SIZE],
        dst: &mut [u8],
        src: &[u8],
    ) -> Result<(), CipherError> {
        ensure_block_aligned(src.len())?;
        ensure_dst(dst, src)?;

        let mut encryptor =
            cbc::Encryptor::<E>::inner_iv_init(self.enc.clone(), GenericArray::from_slice(iv));

        for (input, output) in src
            .chunks_exact(BLOCK_SIZE)
            .zip(dst.chunks_exact_mut(BLOCK_SIZE))
        {
            encryptor.encrypt_block_b2b_mut(
                GenericArray::from_slice(input),
                GenericArray::from_mut_slice(output),
            );
        }

        Ok(())
    }

    pub fn encrypt_in_place(
        &self,
        iv: &[u8; BLOCK_SIZE],
        buf: &mut [u8],
    ) -> Result<(), CipherError> {
        ensure_block_aligned(buf.len())?;

        let mut encryptor =
            cbc::Encryptor::<E>::inner_iv_init(self.enc.clone(), GenericArray::from_slice(iv));

        for block in buf.chunks_exact_mut(BLOCK_SIZE) {
            encryptor.encrypt_block_mut(GenericArray::from_mut_slice(block));
        }

        Ok(())
    }

    pub fn decrypt(
        &self,
        iv: &[u8; BLOCK_SIZE],
        dst: &mut [u8],
        src: &[u8],
    ) -> Result<(), CipherError> {
        ensure_block_aligned(src.len())?;
        ensure_dst(dst, src)?;

        let mut decryptor =
            cbc::Decryptor::<D>::inner_iv_init(self.dec.clone(), GenericArray::from_slice(iv));

        for (input, output) in src
            .chunks_exact(BLOCK_SIZE)
            .zip(dst.chunks_exact_mut(BLOCK_SIZE))
        {
            decryptor.decrypt_block_b2b_mut(
                GenericArray::from_slice(input),
                GenericArray::from_mut_slice(output),
            );
        }

        Ok(())
    }

    /// Decrypts through a scratch copy of `buf`: every plaintext block needs the
    /// previous ciphertext block, which writing in place would destroy.
    pub fn decrypt_in_place(
        &self,
        iv: &[u8; BLOCK_SIZE],
        buf: &mut [u8],
    ) -> Result<(), CipherError> {
        ensure_block_aligned(buf.len())?;

        let scratch = Zeroizing::new(buf.to_vec());
        self.decrypt(iv, buf, &scratch)
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes::cipher::consts::U16;
use aes::cipher::{BlockCipher, BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit};
use hwaes_cipher::{BLOCK_SIZE, CipherError};
use xts_mode::Xts128;

use super::{ensure_dst, ensure_full_block};

/// Two independent schedules for XTS: the first key half encrypts sector
/// data, the second encrypts the tweak.
pub(crate) struct XtsSchedule<C: BlockCipher + BlockEncrypt + BlockDecrypt> {
    xts: Xts128<C>,
}

impl<C> XtsSchedule<C>
where
    C: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockEncrypt + BlockDecrypt + KeyInit,
{
    /// Splits `key` into two equal halves and expands each.
    pub fn expand(key: &[u8]) -> Result<Self, CipherError> {
        if key.len() % 2 != 0 {
            return Err(CipherError::UnsupportedKeySize(key.len()));
        }

        let (data_key, tweak_key) = key.split_at(key.len() / 2);
        let data =
            C::new_from_slice(data_key).map_err(|_| CipherError::UnsupportedKeySize(key.len()))?;
        let tweak =
            C::new_from_slice(tweak_key).map_err(|_| CipherError::UnsupportedKeySize(key.len()))?;

        Ok(Self {
            xts: Xts128::new(data, tweak),
        })
    }

    pub fn encrypt(
        &self,
        tweak: &[u8; BLOCK_SIZE],
        dst: &mut [u8],
        src: &[u8],
    ) -> Result<(), CipherError> {
        ensure_full_block(src.len())?;
        ensure_dst(dst, src)?;

        let sector = &mut dst[..src.len()];
        sector.copy_from_slice(src);
        self.xts.encrypt_sector(sector, *tweak);

        Ok(())
    }

    pub fn encrypt_in_place(
        &self,
        tweak: &[u8; BLOCK_SIZE],
        buf: &mut [u8],
    ) -> Result<(), CipherError> {
        ensure_full_block(buf.len())?;
        self.xts.encrypt_sector(buf, *tweak);

        Ok(())
    }

    pub fn decrypt(
        &self,
        tweak: &[u8; BLOCK_SIZE],
        dst: &mut [u8],
        src: &[u8],
    ) -> Result<(), CipherError> {
        ensure_full_block(src.len())?;
        ensure_dst(dst, src)?;

        let sector = &mut dst[..src.len()];
        sector.copy_from_slice(src);
        self.xts.decrypt_sector(sector, *tweak);

        Ok(())
    }

    pub fn decrypt_in_place(
        &self,
        tweak: &[u8; BLOCK_SIZE],
        buf: &mut [u8],
    ) -> Result<(), CipherError> {
        ensure_full_block(buf.len())?;
        self.xts.decrypt_sector(buf, *tweak);

        Ok(())
    }
}

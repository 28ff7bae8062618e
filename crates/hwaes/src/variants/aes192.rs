// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use aes::{Aes192Dec, Aes192Enc};
use hwaes_cipher::{BLOCK_SIZE, CipherBlock, CipherError, GCM_TAG_SIZE, Mode};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::bind_iv;
use crate::accel::CbcSchedule;

/// AES-192 capability. Legal modes: CBC only; there is no AES-GCM-192.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Aes192Cipher {
    #[zeroize(skip)]
    cbc: CbcSchedule<Aes192Enc, Aes192Dec>,
    iv: [u8; BLOCK_SIZE],
}

impl Aes192Cipher {
    pub(crate) fn new(key: &[u8]) -> Result<Self, CipherError> {
        Ok(Self {
            cbc: CbcSchedule::expand(key)?,
            iv: [0u8; BLOCK_SIZE],
        })
    }
}

impl fmt::Debug for Aes192Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes192Cipher").finish_non_exhaustive()
    }
}

impl CipherBlock for Aes192Cipher {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn supports(&self, mode: Mode) -> bool {
        mode == Mode::Cbc
    }

    fn set_iv(&mut self, iv: &[u8]) {
        bind_iv(&mut self.iv, iv);
    }

    // No GCM state to bind to.
    fn gcm_add_additional_data(&mut self, _additional_data: &[u8]) {}

    fn gcm_auth_tag(&self) -> Option<&[u8; GCM_TAG_SIZE]> {
        None
    }

    fn encrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Cbc => self.cbc.encrypt(&self.iv, dst, src),
            Mode::Gcm | Mode::Xts => Err(CipherError::InvalidMode(mode)),
        }
    }

    fn decrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Cbc => self.cbc.decrypt(&self.iv, dst, src),
            Mode::Gcm | Mode::Xts => Err(CipherError::InvalidMode(mode)),
        }
    }

    fn encrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Cbc => self.cbc.encrypt_in_place(&self.iv, buf),
            Mode::Gcm | Mode::Xts => Err(CipherError::InvalidMode(mode)),
        }
    }

    fn decrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Cbc => self.cbc.decrypt_in_place(&self.iv, buf),
            Mode::Gcm | Mode::Xts => Err(CipherError::InvalidMode(mode)),
        }
    }
}

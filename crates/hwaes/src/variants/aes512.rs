// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use aes::Aes256;
use hwaes_cipher::{BLOCK_SIZE, CipherBlock, CipherError, GCM_TAG_SIZE, Mode};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::bind_iv;
use crate::accel::XtsSchedule;

/// 64-byte key capability: XTS-256 only, two independent 256-bit halves.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Aes512Cipher {
    #[zeroize(skip)]
    xts: XtsSchedule<Aes256>,
    iv: [u8; BLOCK_SIZE],
}

impl Aes512Cipher {
    pub(crate) fn new(key: &[u8]) -> Result<Self, CipherError> {
        Ok(Self {
            xts: XtsSchedule::expand(key)?,
            iv: [0u8; BLOCK_SIZE],
        })
    }
}

impl fmt::Debug for Aes512Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes512Cipher").finish_non_exhaustive()
    }
}

impl CipherBlock for Aes512Cipher {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn supports(&self, mode: Mode) -> bool {
        mode == Mode::Xts
    }

    fn set_iv(&mut self, iv: &[u8]) {
        bind_iv(&mut self.iv, iv);
    }

    fn gcm_add_additional_data(&mut self, _additional_data: &[u8]) {}

    fn gcm_auth_tag(&self) -> Option<&[u8; GCM_TAG_SIZE]> {
        None
    }

    fn encrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Xts => self.xts.encrypt(&self.iv, dst, src),
            Mode::Cbc | Mode::Gcm => Err(CipherError::InvalidMode(mode)),
        }
    }

    fn decrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Xts => self.xts.decrypt(&self.iv, dst, src),
            Mode::Cbc | Mode::Gcm => Err(CipherError::InvalidMode(mode)),
        }
    }

    fn encrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Xts => self.xts.encrypt_in_place(&self.iv, buf),
            Mode::Cbc | Mode::Gcm => Err(CipherError::InvalidMode(mode)),
        }
    }

    fn decrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Xts => self.xts.decrypt_in_place(&self.iv, buf),
            Mode::Cbc | Mode::Gcm => Err(CipherError::InvalidMode(mode)),
        }
    }
}

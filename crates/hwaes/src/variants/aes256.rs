// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use aes::{Aes128, Aes256Dec, Aes256Enc};
use hwaes_cipher::{BLOCK_SIZE, CipherBlock, CipherError, GCM_TAG_SIZE, Mode};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::bind_iv;
use super::gcm_state::GcmState;
use crate::accel::{CbcSchedule, XtsSchedule};

/// AES-256 capability. Legal modes: CBC, GCM, and XTS-128 with the key split
/// into two 128-bit halves.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Aes256Cipher {
    #[zeroize(skip)]
    cbc: CbcSchedule<Aes256Enc, Aes256Dec>,
    #[zeroize(skip)]
    gcm: GcmState<Aes256Enc>,
    #[zeroize(skip)]
    xts: XtsSchedule<Aes128>,
    iv: [u8; BLOCK_SIZE],
}

impl Aes256Cipher {
    pub(crate) fn new(key: &[u8]) -> Result<Self, CipherError> {
        let cbc: CbcSchedule<Aes256Enc, Aes256Dec> = CbcSchedule::expand(key)?;
        let gcm = GcmState::new(cbc.encrypt_schedule().clone());
        let xts = XtsSchedule::expand(key)?;

        Ok(Self {
            cbc,
            gcm,
            xts,
            iv: [0u8; BLOCK_SIZE],
        })
    }
}

impl fmt::Debug for Aes256Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes256Cipher").finish_non_exhaustive()
    }
}

impl CipherBlock for Aes256Cipher {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn supports(&self, _mode: Mode) -> bool {
        true
    }

    fn set_iv(&mut self, iv: &[u8]) {
        bind_iv(&mut self.iv, iv);
    }

    fn gcm_add_additional_data(&mut self, additional_data: &[u8]) {
        self.gcm.set_additional_data(additional_data);
    }

    fn gcm_auth_tag(&self) -> Option<&[u8; GCM_TAG_SIZE]> {
        Some(self.gcm.auth_tag())
    }

    fn encrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Cbc => self.cbc.encrypt(&self.iv, dst, src),
            Mode::Gcm => self.gcm.encrypt(&self.iv, dst, src),
            Mode::Xts => self.xts.encrypt(&self.iv, dst, src),
        }
    }

    fn decrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Cbc => self.cbc.decrypt(&self.iv, dst, src),
            Mode::Gcm => self.gcm.decrypt(&self.iv, dst, src),
            Mode::Xts => self.xts.decrypt(&self.iv, dst, src),
        }
    }

    fn encrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Cbc => self.cbc.encrypt_in_place(&self.iv, buf),
            Mode::Gcm => {
                self.gcm.encrypt_in_place(&self.iv, buf);
                Ok(())
            }
            Mode::Xts => self.xts.encrypt_in_place(&self.iv, buf),
        }
    }

    fn decrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError> {
        match mode {
            Mode::Cbc => self.cbc.decrypt_in_place(&self.iv, buf),
            Mode::Gcm => {
                self.gcm.decrypt_in_place(&self.iv, buf);
                Ok(())
            }
            Mode::Xts => self.xts.decrypt_in_place(&self.iv, buf),
        }
    }
}

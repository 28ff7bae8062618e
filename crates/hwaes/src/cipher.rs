// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use hwaes_cipher::{CipherBlock, CipherError, GCM_TAG_SIZE, Mode};

use crate::variants::{Aes128Cipher, Aes192Cipher, Aes256Cipher, Aes512Cipher};

/// A hardware AES capability, one variant per supported key length.
///
/// Built by [`new_cipher`](crate::new_cipher). Pass it to
/// [`Cbc`](crate::Cbc), [`Gcm`](crate::Gcm) or [`Xts`](crate::Xts), or drive
/// it directly through [`CipherBlock`].
pub enum AesCipher {
    /// 16-byte key: CBC, GCM.
    Aes128(Aes128Cipher),
    /// 24-byte key: CBC.
    Aes192(Aes192Cipher),
    /// 32-byte key: CBC, GCM, XTS-128.
    Aes256(Aes256Cipher),
    /// 64-byte key: XTS-256.
    Aes512(Aes512Cipher),
}

impl AesCipher {
    /// Variant name, e.g. `"AES-128"`.
    pub fn name(&self) -> &'static str {
        match self {
            AesCipher::Aes128(_) => "AES-128",
            AesCipher::Aes192(_) => "AES-192",
            AesCipher::Aes256(_) => "AES-256",
            AesCipher::Aes512(_) => "AES-512",
        }
    }

    /// Length in bytes of the key this capability was built from.
    pub fn key_size(&self) -> usize {
        match self {
            AesCipher::Aes128(_) => 16,
            AesCipher::Aes192(_) => 24,
            AesCipher::Aes256(_) => 32,
            AesCipher::Aes512(_) => 64,
        }
    }

    fn inner(&self) -> &dyn CipherBlock {
        match self {
            AesCipher::Aes128(cipher) => cipher,
            AesCipher::Aes192(cipher) => cipher,
            AesCipher::Aes256(cipher) => cipher,
            AesCipher::Aes512(cipher) => cipher,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn CipherBlock {
        match self {
            AesCipher::Aes128(cipher) => cipher,
            AesCipher::Aes192(cipher) => cipher,
            AesCipher::Aes256(cipher) => cipher,
            AesCipher::Aes512(cipher) => cipher,
        }
    }
}

impl fmt::Debug for AesCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AesCipher {{ variant: {} }}", self.name())
    }
}

impl CipherBlock for AesCipher {
    fn block_size(&self) -> usize {
        self.inner().block_size()
    }

    fn supports(&self, mode: Mode) -> bool {
        self.inner().supports(mode)
    }

    fn set_iv(&mut self, iv: &[u8]) {
        self.inner_mut().set_iv(iv);
    }

    fn gcm_add_additional_data(&mut self, additional_data: &[u8]) {
        self.inner_mut().gcm_add_additional_data(additional_data);
    }

    fn gcm_auth_tag(&self) -> Option<&[u8; GCM_TAG_SIZE]> {
        self.inner().gcm_auth_tag()
    }

    fn encrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        self.inner_mut().encrypt(dst, src, mode)
    }

    fn decrypt(&mut self, dst: &mut [u8], src: &[u8], mode: Mode) -> Result<(), CipherError> {
        self.inner_mut().decrypt(dst, src, mode)
    }

    fn encrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError> {
        self.inner_mut().encrypt_in_place(buf, mode)
    }

    fn decrypt_in_place(&mut self, buf: &mut [u8], mode: Mode) -> Result<(), CipherError> {
        self.inner_mut().decrypt_in_place(buf, mode)
    }
}

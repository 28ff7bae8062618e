// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hwaes_cipher::CipherError;

use crate::cipher::AesCipher;
use crate::feature_detector::FeatureDetector;
use crate::variants::{Aes128Cipher, Aes192Cipher, Aes256Cipher, Aes512Cipher};

/// Builds the capability for `key`, selecting the variant by key length.
///
/// | key bytes | variant | modes |
/// |---|---|---|
/// | 16 | AES-128 | CBC, GCM |
/// | 24 | AES-192 | CBC |
/// | 32 | AES-256 | CBC, GCM, XTS-128 |
/// | 64 | AES-512 | XTS-256 |
///
/// # Errors
///
/// - [`CipherError::HardwareUnsupported`] when the CPU lacks AES acceleration.
///   Checked first.
/// - [`CipherError::UnsupportedKeySize`] for any other key length.
pub fn new_cipher(key: &[u8]) -> Result<AesCipher, CipherError> {
    new_cipher_with_feature_detector(key, &FeatureDetector::new())
}

pub(crate) fn new_cipher_with_feature_detector(
    key: &[u8],
    feature_detector: &FeatureDetector,
) -> Result<AesCipher, CipherError> {
    if !feature_detector.has_aes() {
        tracing::warn!("AES hardware acceleration not available");
        return Err(CipherError::HardwareUnsupported);
    }

    let cipher = match key.len() {
        16 => AesCipher::Aes128(Aes128Cipher::new(key)?),
        24 => AesCipher::Aes192(Aes192Cipher::new(key)?),
        32 => AesCipher::Aes256(Aes256Cipher::new(key)?),
        64 => AesCipher::Aes512(Aes512Cipher::new(key)?),
        other => {
            tracing::debug!(key_size = other, "unsupported AES key size");
            return Err(CipherError::UnsupportedKeySize(other));
        }
    };

    tracing::debug!(variant = cipher.name(), "AES cipher ready");

    Ok(cipher)
}

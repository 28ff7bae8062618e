// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for the GCM wrapper, driven by CipherBlockMock.

use hwaes_test_utils::flip_bit;

use crate::consts::{GCM_MAX_PLAINTEXT_SIZE, GCM_TAG_SIZE};
use crate::error::CipherError;
use crate::gcm::Gcm;
use crate::mode::Mode;
use crate::support::test_utils::{CipherBlockMock, CipherBlockMockBehaviour};
use crate::traits::Aead;

const NONCE: [u8; 12] = [0x42; 12];
const AD: &[u8] = b"header";

fn seal_with_mock(mock: &mut CipherBlockMock, plaintext: &[u8]) -> Vec<u8> {
    let mut gcm = Gcm::new(mock).expect("Failed to Gcm::new(..)");
    let mut out = Vec::new();
    gcm.seal(&mut out, &NONCE, plaintext, AD)
        .expect("Failed to seal(..)");
    out
}

// =============================================================================
// new() / with_nonce_size()
// =============================================================================

#[test]
fn test_new_reports_fixed_sizes() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);

    let gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");

    assert_eq!(gcm.nonce_size(), 12);
    assert_eq!(gcm.overhead(), 16);
}

#[test]
fn test_with_nonce_size_accepts_standard_size() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    assert!(Gcm::with_nonce_size(&mut mock, 12).is_ok());
}

#[test]
fn test_with_nonce_size_rejects_other_sizes() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);

    for size in [0usize, 8, 11, 13, 16, 24] {
        let result = Gcm::with_nonce_size(&mut mock, size);
        assert!(matches!(result, Err(CipherError::NonceSizeUnsupported(s)) if s == size));
    }
}

#[test]
fn test_new_rejects_capability_without_gcm() {
    let mut mock = CipherBlockMock::with_modes(CipherBlockMockBehaviour::None, &[Mode::Cbc]);

    let result = Gcm::new(&mut mock);

    assert!(matches!(result, Err(CipherError::InvalidMode(Mode::Gcm))));
}

#[test]
fn test_nonce_size_is_checked_before_mode() {
    let mut mock = CipherBlockMock::with_modes(CipherBlockMockBehaviour::None, &[Mode::Xts]);

    let result = Gcm::with_nonce_size(&mut mock, 16);

    assert!(matches!(result, Err(CipherError::NonceSizeUnsupported(16))));
}

// =============================================================================
// seal()
// =============================================================================

#[test]
fn test_seal_appends_ciphertext_and_tag() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let plaintext = b"attack at dawn";

    let out = seal_with_mock(&mut mock, plaintext);

    assert_eq!(out.len(), plaintext.len() + GCM_TAG_SIZE);
    assert_ne!(&out[..plaintext.len()], plaintext);
    assert_eq!(mock.iv()[..12], NONCE);
    assert_eq!(mock.iv()[12..], [0u8; 4]);
    assert_eq!(mock.additional_data(), AD);
}

#[test]
fn test_seal_empty_plaintext_yields_tag_only() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);

    let out = seal_with_mock(&mut mock, &[]);

    assert_eq!(out.len(), GCM_TAG_SIZE);
}

#[test]
fn test_seal_preserves_prefix() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");
    let mut out = b"prefix".to_vec();

    gcm.seal(&mut out, &NONCE, b"data", AD)
        .expect("Failed to seal(..)");

    assert_eq!(&out[..6], b"prefix");
    assert_eq!(out.len(), 6 + 4 + GCM_TAG_SIZE);
}

#[test]
fn test_seal_reuses_spare_capacity() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");
    let mut out = Vec::with_capacity(128);
    out.extend_from_slice(b"abc");
    let ptr_before = out.as_ptr();

    gcm.seal(&mut out, &NONCE, &[1u8; 32], AD)
        .expect("Failed to seal(..)");

    assert_eq!(out.as_ptr(), ptr_before);
    assert_eq!(out.capacity(), 128);
}

#[test]
fn test_seal_wipes_and_truncates_on_capability_failure() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::FailEncryptAt(0));
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");
    let mut out = Vec::with_capacity(64);
    out.extend_from_slice(b"keep");

    let result = gcm.seal(&mut out, &NONCE, &[1u8; 20], AD);

    assert!(result.is_err());
    assert_eq!(out, b"keep");
    // SAFETY: the wiped bytes are still within the allocation's capacity and were
    // initialised by the failed seal before truncation.
    let spare = unsafe { core::slice::from_raw_parts(out.as_ptr().add(4), 20 + GCM_TAG_SIZE) };
    assert!(spare.iter().all(|b| *b == 0));
}

#[test]
#[should_panic(expected = "incorrect nonce length given to GCM")]
fn test_seal_panics_on_wrong_nonce_length() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");
    let mut out = Vec::new();

    let _ = gcm.seal(&mut out, &[0u8; 16], b"data", AD);
}

#[test]
fn test_max_plaintext_size_constant() {
    assert_eq!(GCM_MAX_PLAINTEXT_SIZE, 68_719_476_704);
}

// =============================================================================
// open()
// =============================================================================

#[test]
fn test_seal_open_roundtrip() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let plaintext = b"The quick brown fox jumps over the lazy dog";
    let sealed = seal_with_mock(&mut mock, plaintext);

    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");
    let mut out = Vec::new();
    gcm.open(&mut out, &NONCE, &sealed, AD)
        .expect("Failed to open(..)");

    assert_eq!(out, plaintext);
}

#[test]
fn test_open_appends_after_prefix() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let sealed = seal_with_mock(&mut mock, b"body");

    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");
    let mut out = b"head:".to_vec();
    gcm.open(&mut out, &NONCE, &sealed, AD)
        .expect("Failed to open(..)");

    assert_eq!(out, b"head:body");
}

#[test]
fn test_open_rejects_short_ciphertext_without_touching_capability() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");
    let mut out = Vec::new();

    let result = gcm.open(&mut out, &NONCE, &[0u8; GCM_TAG_SIZE - 1], AD);

    drop(gcm);
    assert_eq!(result, Err(CipherError::AuthenticationFailed));
    assert!(out.is_empty());
    assert_eq!(mock.decrypt_count(), 0);
}

#[test]
fn test_open_accepts_tag_only_ciphertext() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let sealed = seal_with_mock(&mut mock, &[]);

    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");
    let mut out = Vec::new();
    gcm.open(&mut out, &NONCE, &sealed, AD)
        .expect("Failed to open(..)");

    assert!(out.is_empty());
}

#[test]
fn test_open_fails_on_every_single_bit_flip() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let sealed = seal_with_mock(&mut mock, b"sixteen byte msg");
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");

    for bit in 0..sealed.len() * 8 {
        let mut tampered = sealed.clone();
        flip_bit(&mut tampered, bit);

        let mut out = b"prefix".to_vec();
        let result = gcm.open(&mut out, &NONCE, &tampered, AD);

        assert_eq!(result, Err(CipherError::AuthenticationFailed));
        assert_eq!(out, b"prefix");
    }
}

#[test]
fn test_open_fails_on_tampered_additional_data() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let sealed = seal_with_mock(&mut mock, b"payload");
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");

    let mut ad = AD.to_vec();
    flip_bit(&mut ad, 3);

    let mut out = Vec::new();
    let result = gcm.open(&mut out, &NONCE, &sealed, &ad);

    assert_eq!(result, Err(CipherError::AuthenticationFailed));
    assert!(out.is_empty());
}

#[test]
fn test_open_fails_on_tampered_nonce() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let sealed = seal_with_mock(&mut mock, b"payload");
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");

    let mut nonce = NONCE;
    flip_bit(&mut nonce, 95);

    let mut out = Vec::new();
    let result = gcm.open(&mut out, &nonce, &sealed, AD);

    assert_eq!(result, Err(CipherError::AuthenticationFailed));
}

#[test]
fn test_open_wipes_plaintext_on_tag_mismatch() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let sealed = seal_with_mock(&mut mock, &[0x11u8; 40]);
    mock.change_behaviour(CipherBlockMockBehaviour::CorruptTag);
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");

    let mut out = Vec::with_capacity(64);
    let result = gcm.open(&mut out, &NONCE, &sealed, AD);

    assert_eq!(result, Err(CipherError::AuthenticationFailed));
    assert!(out.is_empty());
    // SAFETY: the 40 bytes were written by the failed open before truncation and
    // remain within capacity.
    let spare = unsafe { core::slice::from_raw_parts(out.as_ptr(), 40) };
    assert!(spare.iter().all(|b| *b == 0));
}

#[test]
fn test_open_propagates_capability_failure_and_restores_dst() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let sealed = seal_with_mock(&mut mock, b"payload");
    mock.change_behaviour(CipherBlockMockBehaviour::FailDecryptAt(0));
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");

    let mut out = b"x".to_vec();
    let result = gcm.open(&mut out, &NONCE, &sealed, AD);

    assert_eq!(result, Err(CipherError::InvalidMode(Mode::Gcm)));
    assert_eq!(out, b"x");
}

#[test]
#[should_panic(expected = "incorrect nonce length given to GCM")]
fn test_open_panics_on_wrong_nonce_length() {
    let mut mock = CipherBlockMock::new(CipherBlockMockBehaviour::None);
    let mut gcm = Gcm::new(&mut mock).expect("Failed to Gcm::new(..)");
    let mut out = Vec::new();

    let _ = gcm.open(&mut out, &[0u8; 8], &[0u8; 32], AD);
}

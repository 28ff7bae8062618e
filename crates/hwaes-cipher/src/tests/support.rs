// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::{slice_for_append, wipe_appended};

// =============================================================================
// slice_for_append()
// =============================================================================

#[test]
fn test_slice_for_append_grows_by_exact_amount() {
    let mut dst = b"abc".to_vec();

    let start = slice_for_append(&mut dst, 5);

    assert_eq!(start, 3);
    assert_eq!(dst, b"abc\0\0\0\0\0");
}

#[test]
fn test_slice_for_append_reuses_capacity() {
    let mut dst = Vec::with_capacity(32);
    dst.push(1u8);
    let ptr = dst.as_ptr();

    slice_for_append(&mut dst, 31);

    assert_eq!(dst.as_ptr(), ptr);
    assert_eq!(dst.len(), 32);
}

#[test]
fn test_slice_for_append_reallocates_preserving_prefix() {
    let mut dst = Vec::with_capacity(2);
    dst.extend_from_slice(&[9u8, 8]);

    slice_for_append(&mut dst, 100);

    assert_eq!(&dst[..2], &[9, 8]);
    assert_eq!(dst.len(), 102);
    assert!(dst.capacity() >= 102);
}

// =============================================================================
// wipe_appended()
// =============================================================================

#[test]
fn test_wipe_appended_truncates_to_start() {
    let mut dst = b"keepDROP".to_vec();

    wipe_appended(&mut dst, 4);

    assert_eq!(dst, b"keep");
    // SAFETY: bytes 4..8 were initialised and remain within capacity.
    let wiped = unsafe { core::slice::from_raw_parts(dst.as_ptr().add(4), 4) };
    assert_eq!(wiped, &[0u8; 4]);
}

#[test]
fn test_wipe_appended_past_end_is_noop() {
    let mut dst = b"ab".to_vec();

    wipe_appended(&mut dst, 10);

    assert_eq!(dst, b"ab");
}

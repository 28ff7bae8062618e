// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

/// Grows `dst` by exactly `n` zero bytes and returns the offset where the new
/// region starts. Spare capacity is reused; otherwise the prefix is moved to a
/// fresh allocation.
pub(crate) fn slice_for_append(dst: &mut Vec<u8>, n: usize) -> usize {
    let start = dst.len();

    dst.reserve_exact(n);
    dst.resize(start + n, 0);

    start
}

/// Zeroizes everything past `start` and shrinks `dst` back to `start`.
pub(crate) fn wipe_appended(dst: &mut Vec<u8>, start: usize) {
    if let Some(appended) = dst.get_mut(start..) {
        appended.zeroize();
    }
    dst.truncate(start);
}

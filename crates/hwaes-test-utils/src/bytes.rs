// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Decodes a hex string into bytes. Whitespace is ignored so long vectors can
/// be split across lines.
///
/// # Panics
///
/// Panics on an odd number of digits or a non-hex character.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    assert!(digits.len() % 2 == 0, "odd number of hex digits");

    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).expect("Failed to parse hex digit"))
        .collect()
}

/// Flips bit `bit` (0 = least significant bit of byte 0) of `data`.
///
/// # Panics
///
/// Panics if `bit` is out of range.
pub fn flip_bit(data: &mut [u8], bit: usize) {
    data[bit / 8] ^= 1 << (bit % 8);
}

/// Returns `true` if every byte of `data` is zero.
pub fn is_zeroized(data: &[u8]) -> bool {
    data.iter().all(|byte| *byte == 0)
}

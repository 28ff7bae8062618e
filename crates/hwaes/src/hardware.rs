// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::OnceLock;

use crate::feature_detector::FeatureDetector;

static HARDWARE_SUPPORTED: OnceLock<bool> = OnceLock::new();

/// Returns `true` when the CPU provides the AES and carry-less multiply
/// instructions every cipher in this crate runs on.
///
/// The probe runs once per process; later calls return the cached answer.
pub fn is_supported() -> bool {
    *HARDWARE_SUPPORTED.get_or_init(|| FeatureDetector::new().platform_has_aes())
}

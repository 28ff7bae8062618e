// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.


use crate::cipher::AesCipher;
use crate::factory::new_cipher_with_feature_detector;
use crate::feature_detector::{FeatureDetector, FeatureDetectorBehaviour};

/// Builds a capability with the hardware gate forced open. The `aes` backends
/// still pick AES-NI/ARMv8 at runtime where present.
pub(crate) fn forced_cipher(key: &[u8]) -> AesCipher {
    let mut feature_detector = FeatureDetector::new();
    feature_detector.change_behaviour(FeatureDetectorBehaviour::ForceSupported);

    new_cipher_with_feature_detector(key, &feature_detector)
        .expect("Failed to new_cipher_with_feature_detector(..)")
}

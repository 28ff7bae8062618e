// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
pub enum FeatureDetectorBehaviour {
    None,
    ForceSupported,
    ForceUnsupported,
}

pub struct FeatureDetector {
    #[cfg(test)]
    behaviour: FeatureDetectorBehaviour,
}

impl FeatureDetector {
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            #[cfg(test)]
            behaviour: FeatureDetectorBehaviour::None,
        }
    }

    // Raw CPU probe, uncached and without test override.
    // x86 needs AES-NI plus PCLMULQDQ for GHASH and SSE4.1 for the shuffles.
    #[inline(always)]
    pub fn platform_has_aes(&self) -> bool {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        {
            cpufeatures::new!(aes_intrinsics, "aes", "sse4.1", "pclmulqdq");
            aes_intrinsics::get()
        }

        // Detected together with PMULL.
        #[cfg(target_arch = "aarch64")]
        {
            cpufeatures::new!(aes_intrinsics, "aes");
            aes_intrinsics::get()
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
        false
    }

    #[inline(always)]
    pub fn has_aes(&self) -> bool {
        #[cfg(test)]
        {
            match self.behaviour {
                FeatureDetectorBehaviour::None => crate::hardware::is_supported(),
                FeatureDetectorBehaviour::ForceSupported => true,
                FeatureDetectorBehaviour::ForceUnsupported => false,
            }
        }

        #[cfg(not(test))]
        crate::hardware::is_supported()
    }

    #[cfg(test)]
    pub fn change_behaviour(&mut self, behaviour: FeatureDetectorBehaviour) {
        self.behaviour = behaviour;
    }
}

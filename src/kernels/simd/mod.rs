//! SIMD detection and dispatch for the elementwise kernels
//!
//! This module provides runtime CPU feature detection. Each operation
//! family (binary, unary, constant) has its own submodule with SIMD
//! kernels.
//!
//! # Module Structure
//!
//! ```text
//! simd/
//! ├── mod.rs              # This file: detection only
//! ├── lanes.rs            # Main/remainder block split
//! ├── math/               # Shared NEON primitives (transpose, reciprocal)
//! └── {operation}/        # Each operation family
//!     ├── mod.rs          # Unified dispatch (handles all architectures)
//!     └── aarch64/
//!         ├── mod.rs
//!         └── neon.rs
//! ```
//!
//! # Architecture Support
//!
//! | Architecture | Instruction Set | Vector Width | Status    |
//! |--------------|-----------------|--------------|-----------|
//! | ARM64        | NEON            | 128 bits     | Supported |
//! | Any          | Scalar          | N/A          | Fallback  |
//!
//! Non-ARM SIMD instruction sets are out of scope; on those targets every
//! call runs the scalar kernels, which define the reference semantics.

pub(crate) mod binary;
pub(crate) mod constant;
pub(crate) mod lanes;
pub(crate) mod math;
pub(crate) mod unary;

use std::sync::OnceLock;

/// SIMD capability level detected at runtime
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SimdLevel {
    /// NEON baseline for AArch64 (128-bit vectors, 4 x 32-bit lanes)
    Neon = 1,
    /// Scalar fallback (no SIMD)
    Scalar = 0,
}

impl SimdLevel {
    /// Returns true if this level supports NEON operations
    #[inline]
    pub const fn has_neon(self) -> bool {
        matches!(self, Self::Neon)
    }

    /// Returns the number of 32-bit lanes per vector register
    #[inline]
    pub const fn lanes(self) -> usize {
        match self {
            Self::Neon => 4,
            Self::Scalar => 1,
        }
    }

    /// Returns the name of this SIMD level as a string
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neon => "NEON",
            Self::Scalar => "Scalar",
        }
    }
}

impl std::fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cached SIMD level detection
static SIMD_LEVEL: OnceLock<SimdLevel> = OnceLock::new();

/// Detect the best available SIMD level for the current CPU
///
/// This function is cached - the first call performs detection,
/// subsequent calls return the cached result.
#[inline]
pub fn detect_simd() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(detect_simd_uncached)
}

/// Perform actual CPU feature detection (called once)
#[cold]
fn detect_simd_uncached() -> SimdLevel {
    // NEON is mandatory for AArch64 - always available
    if cfg!(target_arch = "aarch64") {
        SimdLevel::Neon
    } else {
        SimdLevel::Scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simd_detection_is_cached() {
        let level1 = detect_simd();
        let level2 = detect_simd();
        assert_eq!(level1, level2);
    }

    #[test]
    fn test_simd_level_properties() {
        assert!(SimdLevel::Neon.has_neon());
        assert!(!SimdLevel::Scalar.has_neon());
        assert_eq!(SimdLevel::Neon.lanes(), 4);
        assert_eq!(SimdLevel::Scalar.lanes(), 1);
        assert!(SimdLevel::Neon > SimdLevel::Scalar);
    }

    #[test]
    fn test_detection_matches_target() {
        #[cfg(target_arch = "aarch64")]
        assert_eq!(detect_simd(), SimdLevel::Neon);
        #[cfg(not(target_arch = "aarch64"))]
        assert_eq!(detect_simd(), SimdLevel::Scalar);
    }
}

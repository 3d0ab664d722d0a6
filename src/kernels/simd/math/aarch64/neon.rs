//! Shared NEON primitives for ARM64
//!
//! # Channel transpose
//!
//! 3-component records do not pack evenly into 4-lane registers. Instead
//! of wasting a lane per register, four consecutive records are
//! de-interleaved into three full registers, one per channel:
//!
//! ```text
//! memory:    x0 y0 z0 x1 y1 z1 x2 y2 z2 x3 y3 z3
//! channels:  [x0 x1 x2 x3] [y0 y1 y2 y3] [z0 z1 z2 z3]
//! ```
//!
//! Each channel register then takes one regular 4-lane operation, and the
//! inverse transpose re-interleaves on store. Full lane utilization,
//! 3 loads + 3 stores per 4 records.
//!
//! # Reciprocal division
//!
//! `vrecpeq_f32` gives an ~8-bit reciprocal estimate; each `vrecpsq_f32`
//! Newton-Raphson step (`r' = r * (2 - d*r)`) roughly squares the
//! accuracy twice over. After two steps the refined reciprocal is good to
//! about one ULP, so `a * recip(b)` is close to, but not bit-identical
//! with, a hardware divide.

use std::arch::aarch64::*;

/// De-interleave four consecutive 3-component f32 records into one
/// register per channel
///
/// # Safety
/// `src` must be valid for 12 f32 reads.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn load3_f32(src: *const f32) -> float32x4x3_t {
    vld3q_f32(src)
}

/// Re-interleave three channel registers into four 3-component f32 records
///
/// Inverse of [`load3_f32`]: `store3_f32(dst, load3_f32(src))` copies
/// four records unchanged.
///
/// # Safety
/// `dst` must be valid for 12 f32 writes.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn store3_f32(dst: *mut f32, channels: float32x4x3_t) {
    vst3q_f32(dst, channels);
}

/// De-interleave four consecutive 3-component i32 records
///
/// # Safety
/// `src` must be valid for 12 i32 reads.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn load3_s32(src: *const i32) -> int32x4x3_t {
    vld3q_s32(src)
}

/// Re-interleave three channel registers into four 3-component i32 records
///
/// # Safety
/// `dst` must be valid for 12 i32 writes.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn store3_s32(dst: *mut i32, channels: int32x4x3_t) {
    vst3q_s32(dst, channels);
}

/// Newton-Raphson refined reciprocal of each lane
///
/// Two refinement steps over the hardware estimate. Accuracy is about one
/// ULP for normal inputs; zero lanes produce infinity.
///
/// # Safety
/// Requires NEON.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn recip_refine_f32(d: float32x4_t) -> float32x4_t {
    let mut r = vrecpeq_f32(d);
    r = vmulq_f32(vrecpsq_f32(d, r), r);
    r = vmulq_f32(vrecpsq_f32(d, r), r);
    r
}

/// Lanewise f32 division via the refined reciprocal
///
/// # Safety
/// Requires NEON.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn div_f32(a: float32x4_t, b: float32x4_t) -> float32x4_t {
    vmulq_f32(a, recip_refine_f32(b))
}

/// Lanewise i32 division through a f32 round trip
///
/// Converts both operands to f32, divides exactly, and truncates back
/// toward zero (matching the scalar `/` operator). The conversion is the
/// precision ceiling: quotients are exact while the operands fit in the
/// f32 mantissa (magnitude below 2^24) and may be off by the conversion
/// error above it. An approximate-reciprocal quotient could land just
/// below an exact integer and truncate wrong, so this path divides
/// exactly instead.
///
/// Divisor lanes of zero produce a saturated result, not a trap; the
/// scalar reference panics instead. Zero divisors are the caller's
/// contract.
///
/// # Safety
/// Requires NEON.
#[inline]
#[target_feature(enable = "neon")]
pub(crate) unsafe fn div_s32(a: int32x4_t, b: int32x4_t) -> int32x4_t {
    let fa = vcvtq_f32_s32(a);
    let fb = vcvtq_f32_s32(b);
    vcvtq_s32_f32(vdivq_f32(fa, fb))
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn to_array_f32(v: float32x4_t) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        vst1q_f32(out.as_mut_ptr(), v);
        out
    }

    #[test]
    fn test_load3_deinterleaves_channels() {
        let records: [f32; 12] = [
            1.0, 2.0, 3.0, // record 0
            4.0, 5.0, 6.0, // record 1
            7.0, 8.0, 9.0, // record 2
            10.0, 11.0, 12.0, // record 3
        ];
        unsafe {
            let ch = load3_f32(records.as_ptr());
            assert_eq!(to_array_f32(ch.0), [1.0, 4.0, 7.0, 10.0]);
            assert_eq!(to_array_f32(ch.1), [2.0, 5.0, 8.0, 11.0]);
            assert_eq!(to_array_f32(ch.2), [3.0, 6.0, 9.0, 12.0]);
        }
    }

    #[test]
    fn test_transpose_round_trip_f32() {
        let records: [f32; 12] = [
            0.5, -1.25, 3.75, 100.0, -0.0, 7.5, 1e-8, 2e8, -42.0, 9.9, 8.8, 7.7,
        ];
        let mut out = [0.0f32; 12];
        unsafe {
            store3_f32(out.as_mut_ptr(), load3_f32(records.as_ptr()));
        }
        assert_eq!(records, out);
    }

    #[test]
    fn test_transpose_round_trip_s32() {
        let records: [i32; 12] = [1, -2, 3, i32::MAX, i32::MIN, 0, 7, 8, 9, -10, -11, -12];
        let mut out = [0i32; 12];
        unsafe {
            store3_s32(out.as_mut_ptr(), load3_s32(records.as_ptr()));
        }
        assert_eq!(records, out);
    }

    #[test]
    fn test_recip_refine_accuracy() {
        let d = [3.0f32, 0.125, -7.5, 1e6];
        unsafe {
            let r = to_array_f32(recip_refine_f32(vld1q_f32(d.as_ptr())));
            for i in 0..4 {
                let exact = 1.0 / d[i];
                assert!(
                    (r[i] - exact).abs() <= 1e-6 * exact.abs(),
                    "recip lane {}: got {}, expected {}",
                    i,
                    r[i],
                    exact
                );
            }
        }
    }

    #[test]
    fn test_div_s32_exact_below_mantissa_limit() {
        let a = [6i32, -7, 16_777_215, -1000];
        let b = [3i32, 2, 5, 10];
        unsafe {
            let q = div_s32(vld1q_s32(a.as_ptr()), vld1q_s32(b.as_ptr()));
            let mut out = [0i32; 4];
            vst1q_s32(out.as_mut_ptr(), q);
            for i in 0..4 {
                assert_eq!(out[i], a[i] / b[i], "lane {}", i);
            }
        }
    }
}

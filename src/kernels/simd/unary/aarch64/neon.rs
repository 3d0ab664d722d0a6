//! NEON unary operation kernels for ARM64
//!
//! Same shape mapping as the binary drivers: flat 4-lane main loop for
//! 1/2/4-component records, channel-transposed blocks of 4 records for
//! 3-component records, scalar kernel for the tail.

use std::arch::aarch64::*;

use crate::kernels::simd::lanes;
use crate::kernels::simd::math::aarch64::neon as math;
use crate::kernels::unary::unary_scalar;
use crate::ops::UnaryOp;

const LANES: usize = 4;
const BLOCK3: usize = 4;

/// NEON unary operation for f32 records
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - All pointers must be valid for `count * comps` f32 elements
#[target_feature(enable = "neon")]
pub(crate) unsafe fn unary_f32(
    op: UnaryOp,
    comps: usize,
    a: *const f32,
    out: *mut f32,
    count: usize,
) {
    let scalars = count * comps;

    let main = if comps == 3 {
        let (main_records, _) = lanes::split(count, BLOCK3);
        let main = main_records * 3;
        match op {
            UnaryOp::Abs => map3_f32(a, out, main, |x| unsafe { vabsq_f32(x) }),
        }
        main
    } else {
        let (main, _) = lanes::split(scalars, LANES);
        match op {
            UnaryOp::Abs => map_f32(a, out, main, |x| unsafe { vabsq_f32(x) }),
        }
        main
    };

    if scalars > main {
        unary_scalar(op, a.add(main), out.add(main), scalars - main);
    }
}

/// NEON unary operation for i32 records
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - All pointers must be valid for `count * comps` i32 elements
#[target_feature(enable = "neon")]
pub(crate) unsafe fn unary_i32(
    op: UnaryOp,
    comps: usize,
    a: *const i32,
    out: *mut i32,
    count: usize,
) {
    let scalars = count * comps;

    let main = if comps == 3 {
        let (main_records, _) = lanes::split(count, BLOCK3);
        let main = main_records * 3;
        match op {
            UnaryOp::Abs => map3_s32(a, out, main, |x| unsafe { vabsq_s32(x) }),
        }
        main
    } else {
        let (main, _) = lanes::split(scalars, LANES);
        match op {
            UnaryOp::Abs => map_s32(a, out, main, |x| unsafe { vabsq_s32(x) }),
        }
        main
    };

    if scalars > main {
        unary_scalar(op, a.add(main), out.add(main), scalars - main);
    }
}

#[target_feature(enable = "neon")]
unsafe fn map_f32<F>(a: *const f32, out: *mut f32, main: usize, f: F)
where
    F: Fn(float32x4_t) -> float32x4_t,
{
    for i in 0..main / LANES {
        let offset = i * LANES;
        let va = vld1q_f32(a.add(offset));
        vst1q_f32(out.add(offset), f(va));
    }
}

#[target_feature(enable = "neon")]
unsafe fn map_s32<F>(a: *const i32, out: *mut i32, main: usize, f: F)
where
    F: Fn(int32x4_t) -> int32x4_t,
{
    for i in 0..main / LANES {
        let offset = i * LANES;
        let va = vld1q_s32(a.add(offset));
        vst1q_s32(out.add(offset), f(va));
    }
}

#[target_feature(enable = "neon")]
unsafe fn map3_f32<F>(a: *const f32, out: *mut f32, main: usize, f: F)
where
    F: Fn(float32x4_t) -> float32x4_t,
{
    for i in 0..main / (3 * BLOCK3) {
        let offset = i * 3 * BLOCK3;
        let ca = math::load3_f32(a.add(offset));
        let r = float32x4x3_t(f(ca.0), f(ca.1), f(ca.2));
        math::store3_f32(out.add(offset), r);
    }
}

#[target_feature(enable = "neon")]
unsafe fn map3_s32<F>(a: *const i32, out: *mut i32, main: usize, f: F)
where
    F: Fn(int32x4_t) -> int32x4_t,
{
    for i in 0..main / (3 * BLOCK3) {
        let offset = i * 3 * BLOCK3;
        let ca = math::load3_s32(a.add(offset));
        let r = int32x4x3_t(f(ca.0), f(ca.1), f(ca.2));
        math::store3_s32(out.add(offset), r);
    }
}

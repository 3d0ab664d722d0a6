//! NEON binary operation kernels for ARM64
//!
//! Processes 4 x 32-bit lanes per iteration using 128-bit vectors.
//!
//! Records of 1, 2, and 4 components pack evenly into 4-lane registers,
//! so those shapes run one flat main loop over `count * comps` scalars
//! (two 2-component records or one 4-component record per register).
//! 3-component records go through the channel transpose in
//! [`crate::kernels::simd::math`]: 4 records per iteration, one register
//! per channel. Leftover elements always take the scalar kernel, which
//! is elementwise-identical to the main loop (Div excepted, within its
//! documented tolerance).

use std::arch::aarch64::*;

use crate::kernels::binary::binary_scalar;
use crate::kernels::simd::lanes;
use crate::kernels::simd::math::aarch64::neon as math;
use crate::ops::BinaryOp;

/// 32-bit lanes per 128-bit register
const LANES: usize = 4;
/// 3-component records per transposed block (4 records = 3 registers)
const BLOCK3: usize = 4;

/// NEON binary operation for f32 records
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - All pointers must be valid for `count * comps` f32 elements
#[target_feature(enable = "neon")]
pub(crate) unsafe fn binary_f32(
    op: BinaryOp,
    comps: usize,
    a: *const f32,
    b: *const f32,
    out: *mut f32,
    count: usize,
) {
    let scalars = count * comps;

    let main = if comps == 3 {
        let (main_records, _) = lanes::split(count, BLOCK3);
        let main = main_records * 3;
        match op {
            BinaryOp::Add => map3_f32(a, b, out, main, |x, y| unsafe { vaddq_f32(x, y) }),
            BinaryOp::Sub => map3_f32(a, b, out, main, |x, y| unsafe { vsubq_f32(x, y) }),
            BinaryOp::Mul => map3_f32(a, b, out, main, |x, y| unsafe { vmulq_f32(x, y) }),
            BinaryOp::Div => map3_f32(a, b, out, main, |x, y| unsafe { math::div_f32(x, y) }),
        }
        main
    } else {
        let (main, _) = lanes::split(scalars, LANES);
        match op {
            BinaryOp::Add => map_f32(a, b, out, main, |x, y| unsafe { vaddq_f32(x, y) }),
            BinaryOp::Sub => map_f32(a, b, out, main, |x, y| unsafe { vsubq_f32(x, y) }),
            BinaryOp::Mul => map_f32(a, b, out, main, |x, y| unsafe { vmulq_f32(x, y) }),
            BinaryOp::Div => map_f32(a, b, out, main, |x, y| unsafe { math::div_f32(x, y) }),
        }
        main
    };

    // Handle tail with scalar
    if scalars > main {
        binary_scalar(op, a.add(main), b.add(main), out.add(main), scalars - main);
    }
}

/// NEON binary operation for i32 records
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - All pointers must be valid for `count * comps` i32 elements
#[target_feature(enable = "neon")]
pub(crate) unsafe fn binary_i32(
    op: BinaryOp,
    comps: usize,
    a: *const i32,
    b: *const i32,
    out: *mut i32,
    count: usize,
) {
    let scalars = count * comps;

    let main = if comps == 3 {
        let (main_records, _) = lanes::split(count, BLOCK3);
        let main = main_records * 3;
        match op {
            BinaryOp::Add => map3_s32(a, b, out, main, |x, y| unsafe { vaddq_s32(x, y) }),
            BinaryOp::Sub => map3_s32(a, b, out, main, |x, y| unsafe { vsubq_s32(x, y) }),
            BinaryOp::Mul => map3_s32(a, b, out, main, |x, y| unsafe { vmulq_s32(x, y) }),
            BinaryOp::Div => map3_s32(a, b, out, main, |x, y| unsafe { math::div_s32(x, y) }),
        }
        main
    } else {
        let (main, _) = lanes::split(scalars, LANES);
        match op {
            BinaryOp::Add => map_s32(a, b, out, main, |x, y| unsafe { vaddq_s32(x, y) }),
            BinaryOp::Sub => map_s32(a, b, out, main, |x, y| unsafe { vsubq_s32(x, y) }),
            BinaryOp::Mul => map_s32(a, b, out, main, |x, y| unsafe { vmulq_s32(x, y) }),
            BinaryOp::Div => map_s32(a, b, out, main, |x, y| unsafe { math::div_s32(x, y) }),
        }
        main
    };

    if scalars > main {
        binary_scalar(op, a.add(main), b.add(main), out.add(main), scalars - main);
    }
}

// ============================================================================
// Flat drivers (shapes 1, 2, 4)
// ============================================================================

#[target_feature(enable = "neon")]
unsafe fn map_f32<F>(a: *const f32, b: *const f32, out: *mut f32, main: usize, f: F)
where
    F: Fn(float32x4_t, float32x4_t) -> float32x4_t,
{
    for i in 0..main / LANES {
        let offset = i * LANES;
        let va = vld1q_f32(a.add(offset));
        let vb = vld1q_f32(b.add(offset));
        vst1q_f32(out.add(offset), f(va, vb));
    }
}

#[target_feature(enable = "neon")]
unsafe fn map_s32<F>(a: *const i32, b: *const i32, out: *mut i32, main: usize, f: F)
where
    F: Fn(int32x4_t, int32x4_t) -> int32x4_t,
{
    for i in 0..main / LANES {
        let offset = i * LANES;
        let va = vld1q_s32(a.add(offset));
        let vb = vld1q_s32(b.add(offset));
        vst1q_s32(out.add(offset), f(va, vb));
    }
}

// ============================================================================
// Transposed drivers (shape 3), `main` in scalars, multiple of 12
// ============================================================================

#[target_feature(enable = "neon")]
unsafe fn map3_f32<F>(a: *const f32, b: *const f32, out: *mut f32, main: usize, f: F)
where
    F: Fn(float32x4_t, float32x4_t) -> float32x4_t,
{
    for i in 0..main / (3 * BLOCK3) {
        let offset = i * 3 * BLOCK3;
        let ca = math::load3_f32(a.add(offset));
        let cb = math::load3_f32(b.add(offset));
        let r = float32x4x3_t(f(ca.0, cb.0), f(ca.1, cb.1), f(ca.2, cb.2));
        math::store3_f32(out.add(offset), r);
    }
}

#[target_feature(enable = "neon")]
unsafe fn map3_s32<F>(a: *const i32, b: *const i32, out: *mut i32, main: usize, f: F)
where
    F: Fn(int32x4_t, int32x4_t) -> int32x4_t,
{
    for i in 0..main / (3 * BLOCK3) {
        let offset = i * 3 * BLOCK3;
        let ca = math::load3_s32(a.add(offset));
        let cb = math::load3_s32(b.add(offset));
        let r = int32x4x3_t(f(ca.0, cb.0), f(ca.1, cb.1), f(ca.2, cb.2));
        math::store3_s32(out.add(offset), r);
    }
}

//! NEON constant-broadcast operation kernels for ARM64
//!
//! The constant record is expanded into register form once per call:
//!
//! | comps | constant register(s)            |
//! |-------|---------------------------------|
//! | 1     | `vdupq` of the single component |
//! | 2     | `[x, y, x, y]` pattern          |
//! | 3     | one `vdupq` per channel (the transposed main loop sees one channel per register) |
//! | 4     | the record loaded as-is         |
//!
//! After that the main loops are identical to the binary drivers with
//! the second operand pinned.

use std::arch::aarch64::*;

use crate::kernels::constant::constant_scalar;
use crate::kernels::simd::lanes;
use crate::kernels::simd::math::aarch64::neon as math;
use crate::ops::BinaryOp;

const LANES: usize = 4;
const BLOCK3: usize = 4;

/// NEON constant-broadcast operation for f32 records
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - `a` and `out` must be valid for `count * comps` f32 elements, `cst`
///   for `comps`
/// - `op` must have a constant form
#[target_feature(enable = "neon")]
pub(crate) unsafe fn constant_f32(
    op: BinaryOp,
    comps: usize,
    a: *const f32,
    cst: *const f32,
    out: *mut f32,
    count: usize,
) {
    let scalars = count * comps;

    let main = if comps == 3 {
        let (main_records, _) = lanes::split(count, BLOCK3);
        let main = main_records * 3;
        let cx = vdupq_n_f32(*cst);
        let cy = vdupq_n_f32(*cst.add(1));
        let cz = vdupq_n_f32(*cst.add(2));
        match op {
            BinaryOp::Add => map3_f32(a, out, main, cx, cy, cz, |x, c| unsafe { vaddq_f32(x, c) }),
            BinaryOp::Sub => map3_f32(a, out, main, cx, cy, cz, |x, c| unsafe { vsubq_f32(x, c) }),
            BinaryOp::Mul => map3_f32(a, out, main, cx, cy, cz, |x, c| unsafe { vmulq_f32(x, c) }),
            BinaryOp::Div => unreachable!("div has no constant-broadcast form"),
        }
        main
    } else {
        let vc = broadcast_f32(comps, cst);
        let (main, _) = lanes::split(scalars, LANES);
        match op {
            BinaryOp::Add => map_f32(a, out, main, |x| unsafe { vaddq_f32(x, vc) }),
            BinaryOp::Sub => map_f32(a, out, main, |x| unsafe { vsubq_f32(x, vc) }),
            BinaryOp::Mul => map_f32(a, out, main, |x| unsafe { vmulq_f32(x, vc) }),
            BinaryOp::Div => unreachable!("div has no constant-broadcast form"),
        }
        main
    };

    if scalars > main {
        constant_scalar(op, a.add(main), cst, comps, out.add(main), scalars - main);
    }
}

/// NEON constant-broadcast operation for i32 records
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - `a` and `out` must be valid for `count * comps` i32 elements, `cst`
///   for `comps`
/// - `op` must have a constant form
#[target_feature(enable = "neon")]
pub(crate) unsafe fn constant_i32(
    op: BinaryOp,
    comps: usize,
    a: *const i32,
    cst: *const i32,
    out: *mut i32,
    count: usize,
) {
    let scalars = count * comps;

    let main = if comps == 3 {
        let (main_records, _) = lanes::split(count, BLOCK3);
        let main = main_records * 3;
        let cx = vdupq_n_s32(*cst);
        let cy = vdupq_n_s32(*cst.add(1));
        let cz = vdupq_n_s32(*cst.add(2));
        match op {
            BinaryOp::Add => map3_s32(a, out, main, cx, cy, cz, |x, c| unsafe { vaddq_s32(x, c) }),
            BinaryOp::Sub => map3_s32(a, out, main, cx, cy, cz, |x, c| unsafe { vsubq_s32(x, c) }),
            BinaryOp::Mul => map3_s32(a, out, main, cx, cy, cz, |x, c| unsafe { vmulq_s32(x, c) }),
            BinaryOp::Div => unreachable!("div has no constant-broadcast form"),
        }
        main
    } else {
        let vc = broadcast_s32(comps, cst);
        let (main, _) = lanes::split(scalars, LANES);
        match op {
            BinaryOp::Add => map_s32(a, out, main, |x| unsafe { vaddq_s32(x, vc) }),
            BinaryOp::Sub => map_s32(a, out, main, |x| unsafe { vsubq_s32(x, vc) }),
            BinaryOp::Mul => map_s32(a, out, main, |x| unsafe { vmulq_s32(x, vc) }),
            BinaryOp::Div => unreachable!("div has no constant-broadcast form"),
        }
        main
    };

    if scalars > main {
        constant_scalar(op, a.add(main), cst, comps, out.add(main), scalars - main);
    }
}

/// Expand a 1/2/4-component constant into one register matching the flat
/// record stream
#[target_feature(enable = "neon")]
unsafe fn broadcast_f32(comps: usize, cst: *const f32) -> float32x4_t {
    match comps {
        1 => vdupq_n_f32(*cst),
        2 => {
            let pattern = [*cst, *cst.add(1), *cst, *cst.add(1)];
            vld1q_f32(pattern.as_ptr())
        }
        // 4 components fill the register exactly
        _ => vld1q_f32(cst),
    }
}

/// Expand a 1/2/4-component constant into one register matching the flat
/// record stream
#[target_feature(enable = "neon")]
unsafe fn broadcast_s32(comps: usize, cst: *const i32) -> int32x4_t {
    match comps {
        1 => vdupq_n_s32(*cst),
        2 => {
            let pattern = [*cst, *cst.add(1), *cst, *cst.add(1)];
            vld1q_s32(pattern.as_ptr())
        }
        _ => vld1q_s32(cst),
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
unsafe fn map3_f32<F>(
    a: *const f32,
    out: *mut f32,
    main: usize,
    cx: float32x4_t,
    cy: float32x4_t,
    cz: float32x4_t,
    f: F,
) where
    F: Fn(float32x4_t, float32x4_t) -> float32x4_t,
{
    for i in 0..main / (3 * BLOCK3) {
        let offset = i * 3 * BLOCK3;
        let ca = math::load3_f32(a.add(offset));
        let r = float32x4x3_t(f(ca.0, cx), f(ca.1, cy), f(ca.2, cz));
        math::store3_f32(out.add(offset), r);
    }
}

#[target_feature(enable = "neon")]
unsafe fn map3_s32<F>(
    a: *const i32,
    out: *mut i32,
    main: usize,
    cx: int32x4_t,
    cy: int32x4_t,
    cz: int32x4_t,
    f: F,
) where
    F: Fn(int32x4_t, int32x4_t) -> int32x4_t,
{
    for i in 0..main / (3 * BLOCK3) {
        let offset = i * 3 * BLOCK3;
        let ca = math::load3_s32(a.add(offset));
        let r = int32x4x3_t(f(ca.0, cx), f(ca.1, cy), f(ca.2, cz));
        math::store3_s32(out.add(offset), r);
    }
}

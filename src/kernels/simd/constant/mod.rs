//! SIMD-accelerated constant-broadcast operations
//!
//! One array operand against one record constant replicated across every
//! record (the `addc`/`subc`/`mulc` family). Division has no constant
//! form; it is rejected with a typed error before dispatch reaches this
//! module.

#[cfg(target_arch = "aarch64")]
mod aarch64;

use super::detect_simd;
use crate::kernels::constant::constant_scalar;
use crate::ops::BinaryOp;

/// SIMD constant-broadcast operation for f32 records
///
/// `cst` points at the `comps` components of the constant record.
///
/// # Safety
/// - `a` and `out` must be valid for `count * comps` f32 elements, `cst`
///   for `comps`
/// - buffers are either identical or disjoint (checked by the caller)
/// - `op` must have a constant form
pub(crate) unsafe fn constant_f32(
    op: BinaryOp,
    comps: usize,
    a: *const f32,
    cst: *const f32,
    out: *mut f32,
    count: usize,
) {
    match detect_simd() {
        #[cfg(target_arch = "aarch64")]
        super::SimdLevel::Neon => aarch64::neon::constant_f32(op, comps, a, cst, out, count),
        _ => constant_scalar(op, a, cst, comps, out, count * comps),
    }
}

/// SIMD constant-broadcast operation for i32 records
///
/// # Safety
/// - `a` and `out` must be valid for `count * comps` i32 elements, `cst`
///   for `comps`
/// - buffers are either identical or disjoint (checked by the caller)
/// - `op` must have a constant form
pub(crate) unsafe fn constant_i32(
    op: BinaryOp,
    comps: usize,
    a: *const i32,
    cst: *const i32,
    out: *mut i32,
    count: usize,
) {
    match detect_simd() {
        #[cfg(target_arch = "aarch64")]
        super::SimdLevel::Neon => aarch64::neon::constant_i32(op, comps, a, cst, out, count),
        _ => constant_scalar(op, a, cst, comps, out, count * comps),
    }
}

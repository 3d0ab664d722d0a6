//! SIMD-accelerated unary operations
//!
//! Dispatches element-wise unary operations (abs) over record arrays to
//! the NEON drivers, falling back to the scalar kernels everywhere else.

#[cfg(target_arch = "aarch64")]
mod aarch64;

use super::detect_simd;
use crate::kernels::unary::unary_scalar;
use crate::ops::UnaryOp;

/// SIMD unary operation for f32 records
///
/// # Safety
/// - `a` and `out` must be valid for `count * comps` f32 elements
/// - buffers are either identical or disjoint (checked by the caller)
pub(crate) unsafe fn unary_f32(
    op: UnaryOp,
    comps: usize,
    a: *const f32,
    out: *mut f32,
    count: usize,
) {
    match detect_simd() {
        #[cfg(target_arch = "aarch64")]
        super::SimdLevel::Neon => aarch64::neon::unary_f32(op, comps, a, out, count),
        _ => unary_scalar(op, a, out, count * comps),
    }
}

/// SIMD unary operation for i32 records
///
/// # Safety
/// - `a` and `out` must be valid for `count * comps` i32 elements
/// - buffers are either identical or disjoint (checked by the caller)
pub(crate) unsafe fn unary_i32(
    op: UnaryOp,
    comps: usize,
    a: *const i32,
    out: *mut i32,
    count: usize,
) {
    match detect_simd() {
        #[cfg(target_arch = "aarch64")]
        super::SimdLevel::Neon => aarch64::neon::unary_i32(op, comps, a, out, count),
        _ => unary_scalar(op, a, out, count * comps),
    }
}

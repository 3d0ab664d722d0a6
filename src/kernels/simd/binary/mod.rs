//! SIMD-accelerated binary operations
//!
//! Dispatches element-wise binary operations (add, sub, mul, div) over
//! record arrays to the NEON drivers, falling back to the scalar kernels
//! everywhere else. `comps` is the record shape (1, 2, 3, or 4
//! components); pointers and `count` are in records.

#[cfg(target_arch = "aarch64")]
mod aarch64;

use super::detect_simd;
use crate::kernels::binary::binary_scalar;
use crate::ops::BinaryOp;

/// SIMD binary operation for f32 records
///
/// # Safety
/// - `a`, `b`, and `out` must be valid for `count * comps` f32 elements
/// - buffers are either identical or disjoint (checked by the caller)
pub(crate) unsafe fn binary_f32(
    op: BinaryOp,
    comps: usize,
    a: *const f32,
    b: *const f32,
    out: *mut f32,
    count: usize,
) {
    match detect_simd() {
        #[cfg(target_arch = "aarch64")]
        super::SimdLevel::Neon => aarch64::neon::binary_f32(op, comps, a, b, out, count),
        _ => binary_scalar(op, a, b, out, count * comps),
    }
}

/// SIMD binary operation for i32 records
///
/// # Safety
/// - `a`, `b`, and `out` must be valid for `count * comps` i32 elements
/// - buffers are either identical or disjoint (checked by the caller)
pub(crate) unsafe fn binary_i32(
    op: BinaryOp,
    comps: usize,
    a: *const i32,
    b: *const i32,
    out: *mut i32,
    count: usize,
) {
    match detect_simd() {
        #[cfg(target_arch = "aarch64")]
        super::SimdLevel::Neon => aarch64::neon::binary_i32(op, comps, a, b, out, count),
        _ => binary_scalar(op, a, b, out, count * comps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_f32(op: BinaryOp, a: &[f32], b: &[f32]) -> Vec<f32> {
        let mut out = vec![0.0f32; a.len()];
        unsafe { binary_scalar(op, a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), a.len()) }
        out
    }

    #[test]
    fn test_binary_add_flat_f32() {
        // 67 scalars: 16 full registers plus a 3-element tail
        let a: Vec<f32> = (0..67).map(|x| x as f32).collect();
        let b: Vec<f32> = (0..67).map(|x| (x * 2) as f32 + 0.5).collect();
        let mut out = vec![0.0f32; 67];

        unsafe { binary_f32(BinaryOp::Add, 1, a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 67) }

        assert_eq!(out, reference_f32(BinaryOp::Add, &a, &b));
    }

    #[test]
    fn test_binary_all_ops_exact_f32() {
        let a: Vec<f32> = (1..=40).map(|x| x as f32 * 1.5).collect();
        let b: Vec<f32> = (1..=40).map(|x| x as f32 * 0.25 + 1.0).collect();

        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul] {
            let mut out = vec![0.0f32; 40];
            unsafe { binary_f32(op, 1, a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 40) }
            assert_eq!(out, reference_f32(op, &a, &b), "{:?}", op);
        }
    }

    #[test]
    fn test_binary_div_f32_within_tolerance() {
        let a: Vec<f32> = (1..=40).map(|x| x as f32 * 2.0).collect();
        let b: Vec<f32> = (1..=40).map(|x| x as f32 * 0.5 + 1.0).collect();
        let mut out = vec![0.0f32; 40];

        unsafe { binary_f32(BinaryOp::Div, 1, a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 40) }

        for i in 0..40 {
            let expected = a[i] / b[i];
            assert!(
                (out[i] - expected).abs() < 1e-5 * expected.abs().max(1.0),
                "div mismatch at {}: got {}, expected {}",
                i,
                out[i],
                expected
            );
        }
    }

    #[test]
    fn test_binary_three_component_records() {
        // 9 records = 2 transposed blocks + 1 leftover record
        let a: Vec<f32> = (0..27).map(|x| x as f32 * 0.5).collect();
        let b: Vec<f32> = (0..27).map(|x| 27.0 - x as f32).collect();
        let mut out = vec![0.0f32; 27];

        unsafe { binary_f32(BinaryOp::Sub, 3, a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 9) }

        assert_eq!(out, reference_f32(BinaryOp::Sub, &a, &b));
    }

    #[test]
    fn test_binary_i32_ops() {
        let a: Vec<i32> = (1..=23).map(|x| x * 7).collect();
        let b: Vec<i32> = (1..=23).collect();

        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
            let mut out = vec![0i32; 23];
            let mut expected = vec![0i32; 23];
            unsafe {
                binary_i32(op, 1, a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 23);
                binary_scalar(op, a.as_ptr(), b.as_ptr(), expected.as_mut_ptr(), 23);
            }
            assert_eq!(out, expected, "{:?}", op);
        }
    }

    #[test]
    fn test_binary_empty() {
        let a: [f32; 0] = [];
        let mut out: [f32; 0] = [];
        unsafe { binary_f32(BinaryOp::Mul, 4, a.as_ptr(), a.as_ptr(), out.as_mut_ptr(), 0) }
    }
}

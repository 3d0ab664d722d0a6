//! Scalar unary kernels

use crate::dtype::Element;
use crate::ops::UnaryOp;

/// Execute a unary operation over a flat scalar stream
///
/// # Safety
/// - `a` and `out` must be valid for `len` elements
/// - `out` may equal `a` (in-place)
#[inline]
pub(crate) unsafe fn unary_scalar<E: Element>(op: UnaryOp, a: *const E, out: *mut E, len: usize) {
    match op {
        UnaryOp::Abs => {
            for i in 0..len {
                *out.add(i) = (*a.add(i)).abs();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_scalar_abs() {
        let a = [-1.5f32, 0.0, 2.5, -0.0];
        let mut out = [0.0f32; 4];
        unsafe { unary_scalar(UnaryOp::Abs, a.as_ptr(), out.as_mut_ptr(), 4) }
        assert_eq!(out, [1.5, 0.0, 2.5, 0.0]);
    }

    #[test]
    fn test_unary_scalar_abs_i32_min_wraps() {
        let a = [i32::MIN, -4, 4];
        let mut out = [0i32; 3];
        unsafe { unary_scalar(UnaryOp::Abs, a.as_ptr(), out.as_mut_ptr(), 3) }
        assert_eq!(out, [i32::MIN, 4, 4]);
    }
}

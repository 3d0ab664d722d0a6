//! Scalar binary kernels
//!
//! Single source of truth for the elementwise definition of each binary
//! operation. The SIMD paths use these kernels for remainder elements and
//! must match them bit-for-bit, except Div whose SIMD form is a documented
//! approximation.

use crate::dtype::Element;
use crate::ops::BinaryOp;

/// Execute a binary operation over a flat scalar stream
///
/// `len` counts scalars, not records; a record array is processed as
/// `count * COMPONENTS` scalars.
///
/// # Safety
/// - `a`, `b`, and `out` must be valid for `len` elements
/// - `out` may equal `a` and/or `b` (in-place); partial overlap is the
///   caller's responsibility to exclude
#[inline]
pub(crate) unsafe fn binary_scalar<E: Element>(
    op: BinaryOp,
    a: *const E,
    b: *const E,
    out: *mut E,
    len: usize,
) {
    match op {
        BinaryOp::Add => {
            for i in 0..len {
                *out.add(i) = *a.add(i) + *b.add(i);
            }
        }
        BinaryOp::Sub => {
            for i in 0..len {
                *out.add(i) = *a.add(i) - *b.add(i);
            }
        }
        BinaryOp::Mul => {
            for i in 0..len {
                *out.add(i) = *a.add(i) * *b.add(i);
            }
        }
        BinaryOp::Div => {
            for i in 0..len {
                *out.add(i) = *a.add(i) / *b.add(i);
            }
        }
    }
}

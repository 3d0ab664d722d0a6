//! Scalar constant-broadcast kernels
//!
//! The constant operand is one record, replicated across the array. Over
//! the flat scalar stream the constant's components cycle with period
//! `comps`, so these kernels index it with `i % comps`. Callers always
//! start them on a record boundary.

use crate::dtype::Element;
use crate::ops::BinaryOp;

/// Execute a constant-broadcast operation over a flat scalar stream
///
/// `cst` points at the `comps` components of the constant record.
///
/// # Safety
/// - `a` and `out` must be valid for `len` elements, `cst` for `comps`
/// - `out` may equal `a` (in-place)
/// - `op` must have a constant form (`BinaryOp::has_const_form`)
#[inline]
pub(crate) unsafe fn constant_scalar<E: Element>(
    op: BinaryOp,
    a: *const E,
    cst: *const E,
    comps: usize,
    out: *mut E,
    len: usize,
) {
    match op {
        BinaryOp::Add => {
            for i in 0..len {
                *out.add(i) = *a.add(i) + *cst.add(i % comps);
            }
        }
        BinaryOp::Sub => {
            for i in 0..len {
                *out.add(i) = *a.add(i) - *cst.add(i % comps);
            }
        }
        BinaryOp::Mul => {
            for i in 0..len {
                *out.add(i) = *a.add(i) * *cst.add(i % comps);
            }
        }
        // Rejected with a typed error at the API boundary
        BinaryOp::Div => unreachable!("div has no constant-broadcast form"),
    }
}

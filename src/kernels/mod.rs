//! Elementwise kernel entry points
//!
//! One generic engine instead of one function per (operation x shape x
//! dtype) combination: the entry points here validate buffers, pick the
//! SIMD or scalar path, and hand the flat scalar stream to the drivers
//! in [`simd`].
//!
//! # Safe vs raw
//!
//! The slice API cannot alias by construction (exclusive `&mut` output),
//! so it only validates lengths. In-place operation goes through the
//! `*_assign` variants, where the destination is also the left operand.
//! The `*_raw` API mirrors the caller-managed-pointer contract of C
//! kernel libraries: identical pointers are an in-place call, partially
//! overlapping pointers are rejected with [`Error::Overlap`] before
//! anything is written.

pub(crate) mod binary;
pub(crate) mod constant;
pub(crate) mod guard;
pub mod simd;
pub(crate) mod unary;

use std::mem;

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::ops::{BinaryOp, UnaryOp};
use crate::record::Record;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Records per parallel chunk; a multiple of every shape's block size so
/// chunk boundaries never split a SIMD block
#[cfg(feature = "rayon")]
const PAR_CHUNK: usize = 16 * 1024;

/// Minimum records before fanning out to worker threads
#[cfg(feature = "rayon")]
const PAR_THRESHOLD: usize = 64 * 1024;

#[inline]
fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::length_mismatch(expected, got));
    }
    Ok(())
}

// ============================================================================
// Dtype dispatch
// ============================================================================

/// # Safety
/// Pointers valid for `count` records; identical or disjoint.
unsafe fn binary_unchecked<R: Record>(
    op: BinaryOp,
    a: *const R,
    b: *const R,
    out: *mut R,
    count: usize,
) {
    match <R::Scalar as Element>::DTYPE {
        DType::F32 => simd::binary::binary_f32(
            op,
            R::COMPONENTS,
            a as *const f32,
            b as *const f32,
            out as *mut f32,
            count,
        ),
        DType::I32 => simd::binary::binary_i32(
            op,
            R::COMPONENTS,
            a as *const i32,
            b as *const i32,
            out as *mut i32,
            count,
        ),
    }
}

/// # Safety
/// Pointers valid for `count` records; identical or disjoint.
unsafe fn unary_unchecked<R: Record>(op: UnaryOp, a: *const R, out: *mut R, count: usize) {
    match <R::Scalar as Element>::DTYPE {
        DType::F32 => {
            simd::unary::unary_f32(op, R::COMPONENTS, a as *const f32, out as *mut f32, count)
        }
        DType::I32 => {
            simd::unary::unary_i32(op, R::COMPONENTS, a as *const i32, out as *mut i32, count)
        }
    }
}

/// # Safety
/// Pointers valid for `count` records; identical or disjoint. `op` must
/// have a constant form.
unsafe fn constant_unchecked<R: Record>(
    op: BinaryOp,
    a: *const R,
    cst: &R,
    out: *mut R,
    count: usize,
) {
    let cp = cst as *const R;
    match <R::Scalar as Element>::DTYPE {
        DType::F32 => simd::constant::constant_f32(
            op,
            R::COMPONENTS,
            a as *const f32,
            cp as *const f32,
            out as *mut f32,
            count,
        ),
        DType::I32 => simd::constant::constant_i32(
            op,
            R::COMPONENTS,
            a as *const i32,
            cp as *const i32,
            out as *mut i32,
            count,
        ),
    }
}

// ============================================================================
// Safe slice API
// ============================================================================

/// Apply a binary operation elementwise: `dst[i] = a[i] op b[i]`
///
/// All three slices must have the same length. For `Div` on float
/// records the result is the documented reciprocal approximation; on
/// integer records divisors must be nonzero (the scalar path panics on
/// zero, per Rust integer semantics).
pub fn apply_binary<R: Record>(op: BinaryOp, dst: &mut [R], a: &[R], b: &[R]) -> Result<()> {
    check_len(dst.len(), a.len())?;
    check_len(dst.len(), b.len())?;

    #[cfg(feature = "rayon")]
    if dst.len() >= PAR_THRESHOLD {
        dst.par_chunks_mut(PAR_CHUNK)
            .zip(a.par_chunks(PAR_CHUNK).zip(b.par_chunks(PAR_CHUNK)))
            .for_each(|(d, (ca, cb))| unsafe {
                binary_unchecked(op, ca.as_ptr(), cb.as_ptr(), d.as_mut_ptr(), d.len());
            });
        return Ok(());
    }

    unsafe { binary_unchecked(op, a.as_ptr(), b.as_ptr(), dst.as_mut_ptr(), dst.len()) };
    Ok(())
}

/// Apply a binary operation in place: `dst[i] = dst[i] op rhs[i]`
pub fn apply_binary_assign<R: Record>(op: BinaryOp, dst: &mut [R], rhs: &[R]) -> Result<()> {
    check_len(dst.len(), rhs.len())?;

    #[cfg(feature = "rayon")]
    if dst.len() >= PAR_THRESHOLD {
        dst.par_chunks_mut(PAR_CHUNK)
            .zip(rhs.par_chunks(PAR_CHUNK))
            .for_each(|(d, cr)| {
                let p = d.as_mut_ptr();
                unsafe { binary_unchecked(op, p, cr.as_ptr(), p, d.len()) };
            });
        return Ok(());
    }

    let count = dst.len();
    let p = dst.as_mut_ptr();
    unsafe { binary_unchecked(op, p, rhs.as_ptr(), p, count) };
    Ok(())
}

/// Apply a unary operation elementwise: `dst[i] = op(src[i])`
pub fn apply_unary<R: Record>(op: UnaryOp, dst: &mut [R], src: &[R]) -> Result<()> {
    check_len(dst.len(), src.len())?;

    #[cfg(feature = "rayon")]
    if dst.len() >= PAR_THRESHOLD {
        dst.par_chunks_mut(PAR_CHUNK)
            .zip(src.par_chunks(PAR_CHUNK))
            .for_each(|(d, cs)| unsafe {
                unary_unchecked(op, cs.as_ptr(), d.as_mut_ptr(), d.len());
            });
        return Ok(());
    }

    unsafe { unary_unchecked(op, src.as_ptr(), dst.as_mut_ptr(), dst.len()) };
    Ok(())
}

/// Apply a unary operation in place: `dst[i] = op(dst[i])`
pub fn apply_unary_assign<R: Record>(op: UnaryOp, dst: &mut [R]) -> Result<()> {
    #[cfg(feature = "rayon")]
    if dst.len() >= PAR_THRESHOLD {
        dst.par_chunks_mut(PAR_CHUNK).for_each(|d| {
            let p = d.as_mut_ptr();
            unsafe { unary_unchecked(op, p, p, d.len()) };
        });
        return Ok(());
    }

    let count = dst.len();
    let p = dst.as_mut_ptr();
    unsafe { unary_unchecked(op, p, p, count) };
    Ok(())
}

/// Apply a constant-broadcast operation: `dst[i] = src[i] op cst`
///
/// The constant record is replicated across every element. Only add,
/// sub, and mul have constant forms; `Div` returns
/// [`Error::UnsupportedConstOp`].
pub fn apply_const<R: Record>(op: BinaryOp, dst: &mut [R], src: &[R], cst: R) -> Result<()> {
    if !op.has_const_form() {
        return Err(Error::UnsupportedConstOp { op: op.as_str() });
    }
    check_len(dst.len(), src.len())?;

    #[cfg(feature = "rayon")]
    if dst.len() >= PAR_THRESHOLD {
        dst.par_chunks_mut(PAR_CHUNK)
            .zip(src.par_chunks(PAR_CHUNK))
            .for_each(|(d, cs)| unsafe {
                constant_unchecked(op, cs.as_ptr(), &cst, d.as_mut_ptr(), d.len());
            });
        return Ok(());
    }

    unsafe { constant_unchecked(op, src.as_ptr(), &cst, dst.as_mut_ptr(), dst.len()) };
    Ok(())
}

/// Apply a constant-broadcast operation in place: `dst[i] = dst[i] op cst`
pub fn apply_const_assign<R: Record>(op: BinaryOp, dst: &mut [R], cst: R) -> Result<()> {
    if !op.has_const_form() {
        return Err(Error::UnsupportedConstOp { op: op.as_str() });
    }

    #[cfg(feature = "rayon")]
    if dst.len() >= PAR_THRESHOLD {
        dst.par_chunks_mut(PAR_CHUNK).for_each(|d| {
            let p = d.as_mut_ptr();
            unsafe { constant_unchecked(op, p, &cst, p, d.len()) };
        });
        return Ok(());
    }

    let count = dst.len();
    let p = dst.as_mut_ptr();
    unsafe { constant_unchecked(op, p, &cst, p, count) };
    Ok(())
}

// ============================================================================
// Raw pointer API
// ============================================================================

/// Apply a binary operation over raw record buffers
///
/// Identical pointers are an in-place operation; partially overlapping
/// byte ranges are rejected before any element is written.
///
/// # Safety
/// - `dst`, `a`, and `b` must be valid for `count` records
/// - the buffers' lifetimes are the caller's responsibility
pub unsafe fn apply_binary_raw<R: Record>(
    op: BinaryOp,
    dst: *mut R,
    a: *const R,
    b: *const R,
    count: usize,
) -> Result<()> {
    let bytes = count * mem::size_of::<R>();
    guard::check(dst as usize, &[a as usize, b as usize], bytes)?;
    binary_unchecked(op, a, b, dst, count);
    Ok(())
}

/// Apply a unary operation over raw record buffers
///
/// # Safety
/// - `dst` and `src` must be valid for `count` records
pub unsafe fn apply_unary_raw<R: Record>(
    op: UnaryOp,
    dst: *mut R,
    src: *const R,
    count: usize,
) -> Result<()> {
    let bytes = count * mem::size_of::<R>();
    guard::check(dst as usize, &[src as usize], bytes)?;
    unary_unchecked(op, src, dst, count);
    Ok(())
}

/// Apply a constant-broadcast operation over raw record buffers
///
/// # Safety
/// - `dst` and `src` must be valid for `count` records
pub unsafe fn apply_const_raw<R: Record>(
    op: BinaryOp,
    dst: *mut R,
    src: *const R,
    cst: R,
    count: usize,
) -> Result<()> {
    if !op.has_const_form() {
        return Err(Error::UnsupportedConstOp { op: op.as_str() });
    }
    let bytes = count * mem::size_of::<R>();
    guard::check(dst as usize, &[src as usize], bytes)?;
    constant_unchecked(op, src, &cst, dst, count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Vec2i, Vec3f};

    #[test]
    fn test_length_mismatch_rejected() {
        let a = [1.0f32; 4];
        let b = [2.0f32; 3];
        let mut dst = [0.0f32; 4];

        let err = apply_binary(BinaryOp::Add, &mut dst, &a, &b).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { expected: 4, got: 3 });
    }

    #[test]
    fn test_div_const_rejected() {
        let src = [Vec2i::new(4, 8); 2];
        let mut dst = [Vec2i::default(); 2];

        let err = apply_const(BinaryOp::Div, &mut dst, &src, Vec2i::new(2, 2)).unwrap_err();
        assert_eq!(err, Error::UnsupportedConstOp { op: "div" });
        // Nothing was written
        assert_eq!(dst, [Vec2i::default(); 2]);
    }

    #[test]
    fn test_binary_assign_in_place() {
        let mut dst: Vec<f32> = (0..11).map(|x| x as f32).collect();
        let rhs: Vec<f32> = (0..11).map(|x| x as f32 * 10.0).collect();

        apply_binary_assign(BinaryOp::Add, &mut dst, &rhs).unwrap();

        for (i, &v) in dst.iter().enumerate() {
            assert_eq!(v, i as f32 * 11.0);
        }
    }

    #[test]
    fn test_raw_identical_pointers_in_place() {
        let mut buf: Vec<i32> = (1..=9).collect();
        let p = buf.as_mut_ptr();

        unsafe { apply_binary_raw(BinaryOp::Add, p, p, p, 9).unwrap() };

        for (i, &v) in buf.iter().enumerate() {
            assert_eq!(v, 2 * (i as i32 + 1));
        }
    }

    #[test]
    fn test_raw_partial_overlap_rejected() {
        let mut buf = [0.0f32; 16];
        for (i, v) in buf.iter_mut().enumerate() {
            *v = i as f32;
        }
        let dst = buf.as_mut_ptr();
        let src = unsafe { buf.as_ptr().add(2) };

        let err = unsafe { apply_binary_raw(BinaryOp::Add, dst, src, src, 8).unwrap_err() };
        assert!(matches!(err, Error::Overlap { .. }));
        // The rejected call must not have written anything
        for (i, &v) in buf.iter().enumerate() {
            assert_eq!(v, i as f32);
        }
    }

    #[test]
    fn test_unary_assign_three_component() {
        let mut dst = vec![Vec3f::new(-1.0, 2.0, -3.0); 9];

        apply_unary_assign(UnaryOp::Abs, &mut dst).unwrap();

        for v in &dst {
            assert_eq!(*v, Vec3f::new(1.0, 2.0, 3.0));
        }
    }

    #[test]
    fn test_const_assign() {
        let mut dst: Vec<Vec2i> = (0..7).map(|i| Vec2i::new(i, i * 2)).collect();

        apply_const_assign(BinaryOp::Mul, &mut dst, Vec2i::new(3, 5)).unwrap();

        for (i, v) in dst.iter().enumerate() {
            assert_eq!(*v, Vec2i::new(i as i32 * 3, i as i32 * 10));
        }
    }

    #[test]
    fn test_empty_slices() {
        let mut dst: [f32; 0] = [];
        apply_binary(BinaryOp::Mul, &mut dst, &[], &[]).unwrap();
        apply_unary_assign(UnaryOp::Abs, &mut dst).unwrap();
    }
}

//! Buffer overlap validation
//!
//! Raw-pointer entry points read from source buffers and write to a
//! destination buffer of the same record count. Identical ranges are an
//! in-place operation and are allowed; partially intersecting ranges
//! would make SIMD loads observe freshly stored results mid-loop, so
//! they are rejected before any store happens.

use crate::error::{Error, Result};

/// Check one (dst, src) pair of byte ranges
///
/// `bytes` is the full extent of both buffers (`count * record size`).
/// Returns `Error::Overlap` when the ranges intersect without being
/// identical.
#[inline]
pub(crate) fn check_pair(dst: usize, src: usize, bytes: usize) -> Result<()> {
    if dst == src || bytes == 0 {
        return Ok(());
    }
    if dst < src + bytes && src < dst + bytes {
        return Err(Error::Overlap { dst, src, bytes });
    }
    Ok(())
}

/// Check a destination against every source buffer of a call
#[inline]
pub(crate) fn check(dst: usize, srcs: &[usize], bytes: usize) -> Result<()> {
    for &src in srcs {
        check_pair(dst, src, bytes)?;
    }
    Ok(())
}

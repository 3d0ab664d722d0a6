//! Main/remainder split for block-wise SIMD loops
//!
//! Every NEON driver walks its array in fixed-size blocks (4 scalars for
//! evenly packing shapes, 4 records for 3-component records) and hands
//! whatever is left to the scalar kernels. The split is the whole engine:
//! no iteration depends on another, so any block-aligned partition of the
//! range computes the same result.

/// Split `count` into a block-aligned main part and a remainder
///
/// Guarantees `main % block == 0` and `main + remainder == count`.
#[inline]
#[cfg_attr(not(target_arch = "aarch64"), allow(dead_code))] // consumed by the NEON drivers
pub(crate) const fn split(count: usize, block: usize) -> (usize, usize) {
    let remainder = count % block;
    (count - remainder, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_exact_multiples() {
        assert_eq!(split(0, 4), (0, 0));
        assert_eq!(split(4, 4), (4, 0));
        assert_eq!(split(16, 4), (16, 0));
    }

    #[test]
    fn test_split_with_remainder() {
        assert_eq!(split(1, 4), (0, 1));
        assert_eq!(split(5, 4), (4, 1));
        assert_eq!(split(7, 4), (4, 3));
        assert_eq!(split(15, 4), (12, 3));
        assert_eq!(split(9, 2), (8, 1));
    }

    #[test]
    fn test_split_invariants() {
        for count in [0usize, 1, 2, 3, 4, 5, 7, 8, 15, 16, 1000] {
            for block in [1usize, 2, 4] {
                let (main, rest) = split(count, block);
                assert_eq!(main + rest, count);
                assert_eq!(main % block, 0);
                assert!(rest < block);
            }
        }
    }
}

//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Div, Mul, Sub};

/// Trait for the scalar types records are built from
///
/// This trait connects Rust's type system to vecr's runtime dtype tag.
/// It is implemented for `f32` and `i32` only; all record shapes share
/// one of these two scalar types.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - `Add + Sub + Mul + Div` - Arithmetic operations (Output = Self)
/// - `PartialOrd` - Comparison, used by tests and future min/max work
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Absolute value
    ///
    /// For `i32` this is `wrapping_abs`: `i32::MIN` maps to itself, which
    /// is what the NEON `vabsq_s32` instruction produces, keeping the
    /// scalar reference bit-identical to the SIMD path.
    fn abs(self) -> Self;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }
}

impl Element for i32 {
    const DTYPE: DType = DType::I32;

    #[inline]
    fn abs(self) -> Self {
        self.wrapping_abs()
    }
}

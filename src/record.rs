//! Fixed-width record types
//!
//! A record is a 1-, 2-, 3-, or 4-component tuple of one 32-bit scalar
//! type. Arrays of records are contiguous with no padding beyond the
//! natural alignment of the scalar, so a `&[Vec3f]` of length `n` is
//! layout-compatible with a `&[f32]` of length `3 * n`.

use crate::dtype::Element;
use bytemuck::{Pod, Zeroable};

/// Trait over the element types the kernels accept
///
/// Implemented for the bare scalars (`f32`, `i32`, one component each)
/// and the six tuple records below. `COMPONENTS` drives the per-shape
/// SIMD lane mapping; `Scalar` selects the kernel dtype.
pub trait Record: Copy + Send + Sync + Pod + Zeroable + 'static {
    /// Scalar type of each component
    type Scalar: Element;

    /// Number of components per record (1 to 4)
    const COMPONENTS: usize;
}

impl Record for f32 {
    type Scalar = f32;
    const COMPONENTS: usize = 1;
}

impl Record for i32 {
    type Scalar = i32;
    const COMPONENTS: usize = 1;
}

/// A 2-component f32 record
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2f {
    /// First component
    pub x: f32,
    /// Second component
    pub y: f32,
}

/// A 3-component f32 record
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3f {
    /// First component
    pub x: f32,
    /// Second component
    pub y: f32,
    /// Third component
    pub z: f32,
}

/// A 4-component f32 record
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4f {
    /// First component
    pub x: f32,
    /// Second component
    pub y: f32,
    /// Third component
    pub z: f32,
    /// Fourth component
    pub w: f32,
}

/// A 2-component i32 record
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Vec2i {
    /// First component
    pub x: i32,
    /// Second component
    pub y: i32,
}

/// A 3-component i32 record
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Vec3i {
    /// First component
    pub x: i32,
    /// Second component
    pub y: i32,
    /// Third component
    pub z: i32,
}

/// A 4-component i32 record
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Vec4i {
    /// First component
    pub x: i32,
    /// Second component
    pub y: i32,
    /// Third component
    pub z: i32,
    /// Fourth component
    pub w: i32,
}

impl Vec2f {
    /// Construct from components
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vec3f {
    /// Construct from components
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Vec4f {
    /// Construct from components
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl Vec2i {
    /// Construct from components
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Vec3i {
    /// Construct from components
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl Vec4i {
    /// Construct from components
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }
}

impl Record for Vec2f {
    type Scalar = f32;
    const COMPONENTS: usize = 2;
}

impl Record for Vec3f {
    type Scalar = f32;
    const COMPONENTS: usize = 3;
}

impl Record for Vec4f {
    type Scalar = f32;
    const COMPONENTS: usize = 4;
}

impl Record for Vec2i {
    type Scalar = i32;
    const COMPONENTS: usize = 2;
}

impl Record for Vec3i {
    type Scalar = i32;
    const COMPONENTS: usize = 3;
}

impl Record for Vec4i {
    type Scalar = i32;
    const COMPONENTS: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_record_layout_is_packed() {
        assert_eq!(size_of::<Vec2f>(), 8);
        assert_eq!(size_of::<Vec3f>(), 12);
        assert_eq!(size_of::<Vec4f>(), 16);
        assert_eq!(size_of::<Vec2i>(), 8);
        assert_eq!(size_of::<Vec3i>(), 12);
        assert_eq!(size_of::<Vec4i>(), 16);

        assert_eq!(align_of::<Vec3f>(), align_of::<f32>());
        assert_eq!(align_of::<Vec4i>(), align_of::<i32>());
    }

    #[test]
    fn test_record_scalar_cast() {
        let v = [Vec3f::new(1.0, 2.0, 3.0), Vec3f::new(4.0, 5.0, 6.0)];
        let flat: &[f32] = bytemuck::cast_slice(&v);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_components() {
        assert_eq!(<f32 as Record>::COMPONENTS, 1);
        assert_eq!(Vec2i::COMPONENTS, 2);
        assert_eq!(Vec3f::COMPONENTS, 3);
        assert_eq!(Vec4f::COMPONENTS, 4);
    }
}

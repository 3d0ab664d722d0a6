//! Data type system for vecr records
//!
//! This module provides the `DType` enum representing the supported scalar
//! element types, plus the `Element` trait connecting them to Rust types.

mod element;

pub use element::Element;

use std::fmt;

/// Scalar element type of a record
///
/// Every record shape (1 to 4 components) is built from one of these
/// 32-bit scalar types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating point
    F32,
    /// 32-bit signed integer
    I32,
}

impl DType {
    /// Size of one scalar in bytes
    #[inline]
    pub const fn size_bytes(self) -> usize {
        4
    }

    /// Returns true for floating-point types
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32)
    }

    /// Returns the name of this dtype as a string
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::I32 => "i32",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_properties() {
        assert_eq!(DType::F32.size_bytes(), 4);
        assert_eq!(DType::I32.size_bytes(), 4);
        assert!(DType::F32.is_float());
        assert!(!DType::I32.is_float());
    }

    #[test]
    fn test_dtype_display() {
        assert_eq!(DType::F32.to_string(), "f32");
        assert_eq!(DType::I32.to_string(), "i32");
    }
}

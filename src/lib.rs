//! # vecr
//!
//! **SIMD-accelerated elementwise arithmetic over small fixed-width numeric records.**
//!
//! vecr computes pointwise arithmetic (abs, add, sub, mul, div, and
//! constant-broadcast add/sub/mul) over arrays of 1-, 2-, 3-, or
//! 4-component 32-bit float or integer records, using NEON registers on
//! ARM64 and a scalar fallback everywhere else.
//!
//! ## Why vecr?
//!
//! - **One engine, forty signatures' worth of kernels**: operations,
//!   record shapes, and dtypes are parameters of a single generic
//!   driver, not hand-written variants
//! - **Full lane utilization for 3-component records**: a channel
//!   transpose maps four records onto three registers instead of
//!   wasting a lane per record
//! - **Aliasing without undefined behavior**: in-place calls are first
//!   class, partial overlap is rejected with a typed error before any
//!   write
//! - **Scalar path as oracle**: every SIMD path is validated against the
//!   scalar kernels bit-for-bit (division within a documented tolerance)
//!
//! ## Quick Start
//!
//! ```
//! use vecr::{apply_binary, BinaryOp, Vec3f};
//!
//! let a: Vec<Vec3f> = (0..9).map(|i| Vec3f::new(i as f32, 1.0, 2.0)).collect();
//! let b = vec![Vec3f::new(0.5, 0.5, 0.5); 9];
//! let mut dst = vec![Vec3f::default(); 9];
//!
//! apply_binary(BinaryOp::Add, &mut dst, &a, &b)?;
//! assert_eq!(dst[8], Vec3f::new(8.5, 1.5, 2.5));
//! # Ok::<(), vecr::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): multi-threaded execution of large arrays via
//!   block-aligned chunking
//!
//! ## Precision Notes
//!
//! Float division uses a Newton-Raphson refined reciprocal (about one
//! ULP, not bit-identical to `/`). Integer division round-trips through
//! f32: exact below 2^24 magnitude, precision-limited above. Integer
//! `abs` wraps at `i32::MIN`, matching the hardware instruction.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod kernels;
pub mod ops;
pub mod record;

pub use error::{Error, Result};
pub use kernels::simd::{detect_simd, SimdLevel};
pub use kernels::{
    apply_binary, apply_binary_assign, apply_binary_raw, apply_const, apply_const_assign,
    apply_const_raw, apply_unary, apply_unary_assign, apply_unary_raw,
};
pub use ops::{BinaryOp, UnaryOp};
pub use record::{Record, Vec2f, Vec2i, Vec3f, Vec3i, Vec4f, Vec4i};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::kernels::simd::{detect_simd, SimdLevel};
    pub use crate::kernels::{
        apply_binary, apply_binary_assign, apply_const, apply_const_assign, apply_unary,
        apply_unary_assign,
    };
    pub use crate::ops::{BinaryOp, UnaryOp};
    pub use crate::record::{Record, Vec2f, Vec2i, Vec3f, Vec3i, Vec4f, Vec4i};
}

//! ARM64 unary operation kernels

pub(crate) mod neon;

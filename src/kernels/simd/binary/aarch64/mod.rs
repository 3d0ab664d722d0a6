//! ARM64 binary operation kernels

pub(crate) mod neon;

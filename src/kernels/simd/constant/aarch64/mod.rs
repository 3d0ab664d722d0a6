//! ARM64 constant-broadcast operation kernels

pub(crate) mod neon;

//! ARM64 implementations of the shared math primitives

pub(crate) mod neon;

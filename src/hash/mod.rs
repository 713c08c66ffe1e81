//! Hash algorithms exposed by the crate.
//!
//! Two pipelines cover the whole SHA-2 family: `sha256` (32-bit words,
//! 64-byte blocks, 64 rounds) and `sha512` (64-bit words, 128-byte blocks,
//! 80 rounds). Variants within a pipeline differ only in their initial
//! chaining value and the length of the hex digest they keep.

pub mod encode;
pub mod padding;
pub mod sha256;
pub mod sha512;

/// Re-exports of the per-variant digest functions.
pub use sha256::core::{sha224, sha256};
pub use sha512::core::{sha384, sha512, sha512_224, sha512_256};

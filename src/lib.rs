//! SHA-2 message digests as specified by FIPS 180-4
//!
//! This crate computes the six SHA-2 digest variants (SHA-256, SHA-224,
//! SHA-512, SHA-384, SHA-512/224 and SHA-512/256) over in-memory byte
//! inputs, returning each digest as a fixed-length lowercase hexadecimal
//! string.
//!
//! The focus is on **clarity and auditability**. Every
//! multi-byte encoding (block decode, length field, digest serialization)
//! is big-endian and explicit; all arithmetic is fixed-width modular; no
//! external dependencies are pulled into the library itself.
//!
//! # Module overview
//!
//! - `hash`
//!   The two SHA-2 pipelines and their supporting components. The 32-bit
//!   pipeline (`hash::sha256`) serves SHA-256 and SHA-224; the 64-bit
//!   pipeline (`hash::sha512`) serves SHA-512, SHA-384, SHA-512/224 and
//!   SHA-512/256. Padding and hex finalization live in their own
//!   submodules and are shared by both pipelines.
//!
//! # Design goals
//!
//! - No runtime dependencies
//! - Minimal and explicit APIs: one function per digest variant
//! - Stable, well-defined semantics anchored to NIST test vectors
//! - Clear separation between the compression cores and the surrounding
//!   padding, scheduling and finalization steps
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled SHA-2
//! implementation with byte-exact, vector-verified output.
//!
//! # Example
//!
//! ```
//! use fips180::hash::sha256;
//!
//! let digest = sha256(b"abc");
//! assert_eq!(
//!     digest,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod hash;

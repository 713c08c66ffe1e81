//! 32-bit pipeline: block processing and variant digests.
//!
//! This module runs the padded message through the SHA-256 compression
//! function and finalizes the chaining state into a hex digest. SHA-256
//! and SHA-224 share everything except their initial chaining value and
//! the number of hex characters kept.

use crate::hash::encode::{serialize256, to_hex};
use crate::hash::padding::pad;
use crate::hash::sha256::computations::{all_rounds, expand_schedule};
use crate::hash::sha256::{BLOCK_LEN, H224_INIT, H256_INIT, SHA224_HEX_LEN, SHA256_HEX_LEN};

/// Compresses a single 512-bit message block.
///
/// Decodes the 64-byte block into 16 big-endian words, expands the
/// message schedule and updates the hash state in place.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (8 × 32-bit words)
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    let schedule = expand_schedule(w);
    all_rounds(state, &schedule);
}

/// Runs the 32-bit pipeline over `input` starting from `iv`.
///
/// Pads the input, compresses it block by block and returns the final
/// chaining state. Both variants of the pipeline are this function plus a
/// choice of initial value and digest truncation.
pub fn digest(iv: [u32; 8], input: &[u8]) -> [u32; 8] {
    let mut state = iv;

    let padded = pad(input, BLOCK_LEN);
    for block in padded.chunks_exact(BLOCK_LEN) {
        let block: &[u8; 64] = block.try_into().unwrap();
        compress(block, &mut state);
    }

    state
}

/// Computes the SHA-256 digest of `input` as 64 lowercase hex characters.
pub fn sha256(input: &[u8]) -> String {
    let state = digest(H256_INIT, input);

    to_hex(&serialize256(&state), SHA256_HEX_LEN)
}

/// Computes the SHA-224 digest of `input` as 56 lowercase hex characters.
///
/// Runs the same pipeline as [`sha256`] from the SHA-224 initial value and
/// keeps the leftmost 224 bits of the result.
pub fn sha224(input: &[u8]) -> String {
    let state = digest(H224_INIT, input);

    to_hex(&serialize256(&state), SHA224_HEX_LEN)
}

//! 64-bit pipeline: block processing and variant digests.
//!
//! This module runs the padded message through the SHA-512 compression
//! function and finalizes the chaining state into a hex digest. All four
//! variants share the pipeline; each supplies its own initial chaining
//! value and digest length.

use crate::hash::encode::{serialize512, to_hex};
use crate::hash::padding::pad;
use crate::hash::sha512::computations::{all_rounds, expand_schedule};
use crate::hash::sha512::{
    BLOCK_LEN, H384_INIT, H512_224_INIT, H512_256_INIT, H512_INIT, SHA384_HEX_LEN,
    SHA512_224_HEX_LEN, SHA512_256_HEX_LEN, SHA512_HEX_LEN,
};

/// Compresses a single 1024-bit message block.
///
/// Decodes the 128-byte block into 16 big-endian words, expands the
/// message schedule and updates the hash state in place.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
pub fn compress(block: &[u8; 128], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_be_bytes(chunk.try_into().unwrap());
    }

    let schedule = expand_schedule(w);
    all_rounds(state, &schedule);
}

/// Runs the 64-bit pipeline over `input` starting from `iv`.
///
/// Pads the input, compresses it block by block and returns the final
/// chaining state. Every variant of the pipeline is this function plus a
/// choice of initial value and digest truncation.
pub fn digest(iv: [u64; 8], input: &[u8]) -> [u64; 8] {
    let mut state = iv;

    let padded = pad(input, BLOCK_LEN);
    for block in padded.chunks_exact(BLOCK_LEN) {
        let block: &[u8; 128] = block.try_into().unwrap();
        compress(block, &mut state);
    }

    state
}

/// Computes the SHA-512 digest of `input` as 128 lowercase hex characters.
pub fn sha512(input: &[u8]) -> String {
    let state = digest(H512_INIT, input);

    to_hex(&serialize512(&state), SHA512_HEX_LEN)
}

/// Computes the SHA-384 digest of `input` as 96 lowercase hex characters.
///
/// Runs the same pipeline as [`sha512`] from the SHA-384 initial value and
/// keeps the leftmost 384 bits of the result.
pub fn sha384(input: &[u8]) -> String {
    let state = digest(H384_INIT, input);

    to_hex(&serialize512(&state), SHA384_HEX_LEN)
}

/// Computes the SHA-512/224 digest of `input` as 56 lowercase hex
/// characters.
pub fn sha512_224(input: &[u8]) -> String {
    let state = digest(H512_224_INIT, input);

    to_hex(&serialize512(&state), SHA512_224_HEX_LEN)
}

/// Computes the SHA-512/256 digest of `input` as 64 lowercase hex
/// characters.
pub fn sha512_256(input: &[u8]) -> String {
    let state = digest(H512_256_INIT, input);

    to_hex(&serialize512(&state), SHA512_256_HEX_LEN)
}

//! Digest finalization: state serialization and hex encoding.
//!
//! The chaining state is serialized word by word in big-endian order,
//! emitting exactly as many bytes as the word is wide. The hex string is
//! then truncated to the variant's digest length, which is how the
//! truncating variants (SHA-224, SHA-384, SHA-512/224, SHA-512/256) keep
//! the leftmost bytes of their parent pipeline's output.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Serializes a 32-bit chaining state as 32 big-endian bytes.
pub fn serialize256(state: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];

    for (i, word) in state.iter().enumerate() {
        out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
    }

    out
}

/// Serializes a 64-bit chaining state as 64 big-endian bytes.
pub fn serialize512(state: &[u64; 8]) -> [u8; 64] {
    let mut out = [0u8; 64];

    for (i, word) in state.iter().enumerate() {
        out[i * 8..(i + 1) * 8].copy_from_slice(&word.to_be_bytes());
    }

    out
}

/// Hex-encodes `bytes` in lowercase and truncates to `hex_len` characters.
///
/// Truncating the hex string keeps the digest prefix, equivalent to
/// dropping trailing bytes of the raw digest.
pub fn to_hex(bytes: &[u8], hex_len: usize) -> String {
    debug_assert!(hex_len <= bytes.len() * 2);

    let mut out = String::with_capacity(bytes.len() * 2);

    for &byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }

    out.truncate(hex_len);

    out
}

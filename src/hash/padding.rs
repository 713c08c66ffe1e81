//! SHA-2 message padding.
//!
//! Both pipelines pad the same way, differing only in the block size and
//! the width of the trailing length field: the message is followed by a
//! single 0x80 byte, the minimal run of zero bytes, and the message length
//! in bits as a big-endian integer occupying the last `block_len / 8`
//! bytes of the final block.

/// Pads `input` into a buffer whose length is a multiple of `block_len`.
///
/// `block_len` is 64 for the 32-bit pipeline and 128 for the 64-bit
/// pipeline. The returned buffer is the input, the 0x80 terminator, zero
/// fill, and the bit length of the input encoded big-endian in the final
/// `block_len / 8` bytes.
///
/// # Notes
/// - The bit length is always computed as a 64-bit value. For the 128-bit
///   length field of the 64-bit pipeline the high 8 bytes stay zero, which
///   caps supported inputs at 2^64 - 1 bits. Longer inputs encode the low
///   64 bits of their true bit length.
/// - An input already ending on a block boundary gains one full block of
///   padding; an input too close to the boundary for the terminator and
///   length field spills into an extra block.
pub fn pad(input: &[u8], block_len: usize) -> Vec<u8> {
    let length_field = block_len / 8;
    let bit_len = (input.len() as u64) << 3;

    let mut padded = Vec::with_capacity(input.len() + 1 + length_field + block_len);
    padded.extend_from_slice(input);
    padded.push(0x80);

    // Zero fill up to the length field, then zero the high bytes of the
    // field itself. The low 8 bytes carry the bit length.
    let zeros = (block_len - (padded.len() + length_field) % block_len) % block_len;
    padded.resize(padded.len() + zeros + length_field - 8, 0);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(padded.len() % block_len, 0);

    padded
}

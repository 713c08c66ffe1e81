use fips180::hash::{sha224, sha256};

fn expect_sha256_eq(input: &[u8], expected: &str) {
    let got = sha256(input);

    assert_eq!(
        got, expected,
        "Digest mismatch for input {:?}\nExpected {}\nGot      {}",
        input, expected, got,
    );
}

fn expect_sha224_eq(input: &[u8], expected: &str) {
    let got = sha224(input);

    assert_eq!(
        got, expected,
        "Digest mismatch for input {:?}\nExpected {}\nGot      {}",
        input, expected, got,
    );
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_sha256_eq(
        &[],
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn sha256_abc_vector() {
    expect_sha256_eq(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn sha256_two_block_vector() {
    expect_sha256_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn sha256_known_phrase() {
    expect_sha256_eq(
        b"The quick brown fox jumps over the lazy dog",
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    );
}

#[test]
fn sha256_million_a() {
    let buf = vec![b'a'; 1_000_000];

    assert_eq!(
        sha256(&buf),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

#[test]
fn sha224_empty_vector() {
    expect_sha224_eq(&[], "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f");
}

#[test]
fn sha224_abc_vector() {
    expect_sha224_eq(
        b"abc",
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
    );
}

#[test]
fn sha224_two_block_vector() {
    expect_sha224_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
    );
}

#[test]
fn sha224_known_phrase() {
    expect_sha224_eq(
        b"The quick brown fox jumps over the lazy dog",
        "730e109bd7a8a32b1cb9d9a09aa2325d2430587ddbc0c38bad911525",
    );
}

// -------------------------------------------------------
// 2. LENGTHS FROM 0 TO 256
// -------------------------------------------------------

#[test]
fn sha256_incremental_lengths() {
    let mut buf = Vec::with_capacity(256);
    for i in 0..256 {
        buf.push(i as u8);
        let _ = sha256(&buf);
        let _ = sha224(&buf);
    }
}

// -------------------------------------------------------
// 3. 0x00, 0xFF, AND REPEATED PATTERNS
// -------------------------------------------------------

#[test]
fn sha256_zeroes_various_lengths() {
    for len in [1, 2, 4, 8, 16, 32, 64, 128, 255, 256] {
        let buf = vec![0u8; len];
        let _ = sha256(&buf);
    }
}

#[test]
fn sha256_ff_various_lengths() {
    for len in [1, 2, 4, 8, 16, 32, 64, 128, 255, 256] {
        let buf = vec![0xFF; len];
        let _ = sha256(&buf);
    }
}

// -------------------------------------------------------
// 4. PADDING BOUNDARIES
// -------------------------------------------------------

// 55 bytes leave exactly room for 0x80 plus the length field; 56..=63
// spill the length field into a second block.
#[test]
fn sha256_padding_boundary_lengths() {
    for len in 55..=64 {
        let buf = vec![0x33u8; len];
        let _ = sha256(&buf);
    }
}

#[test]
fn sha256_block_boundary_64() {
    let buf = vec![0x11u8; 64];
    let _ = sha256(&buf);
}

#[test]
fn sha256_block_boundary_128() {
    let buf = vec![0x22u8; 128];
    let _ = sha256(&buf);
}

// -------------------------------------------------------
// 5. MULTI-BLOCK INPUTS
// -------------------------------------------------------

#[test]
fn sha256_large_multiblock() {
    let mut buf = Vec::new();
    for i in 0..5000 {
        buf.push((i % 256) as u8);
    }
    let _ = sha256(&buf);
}

#[test]
fn sha256_single_bytes() {
    for b in 0u8..=255 {
        let _ = sha256(&[b]);
    }
}

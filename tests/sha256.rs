use condensation_crypto::hash::{DIGEST_LEN, Digest, sha256};
use sha2::{Digest as _, Sha256};

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

fn expect_sha256_eq(input: &[u8], expected: &str) {
    let got = sha256(input);

    assert_eq!(
        got.as_bytes().to_vec(),
        hex(expected),
        "Digest mismatch for input of {} bytes\nExpected {}\nGot      {}",
        input.len(),
        expected,
        got,
    );
}

// -------------------------------------------------------
// OFFICIAL SHA-256 TEST VECTORS (FIPS 180-4 examples)
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_sha256_eq(
        b"",
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
fn sha256_million_a() {
    expect_sha256_eq(
        &vec![b'a'; 1_000_000],
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

// -------------------------------------------------------
// PADDING BOUNDARIES AGAINST THE sha2 CRATE
// -------------------------------------------------------

#[test]
fn sha256_matches_reference_around_block_boundaries() {
    let data: Vec<u8> = (0..300u32).map(|i| (i * 7 + 3) as u8).collect();

    for len in 0..data.len() {
        let input = &data[..len];
        let reference = Sha256::digest(input);

        assert_eq!(sha256(input).as_bytes()[..], reference[..], "length {len}");
    }
}

#[test]
fn sha256_is_deterministic_and_fixed_size() {
    let a = sha256(b"condensation");
    let b = sha256(b"condensation");

    assert_eq!(a, b);
    assert_eq!(a.as_bytes().len(), DIGEST_LEN);
    assert_ne!(a, sha256(b"condensatioN"));
}

#[test]
fn digest_from_slice_checks_length() {
    assert!(Digest::from_slice(&[0u8; 31]).is_err());
    assert!(Digest::from_slice(&[0u8; 33]).is_err());

    let d = Digest::from_slice(&[0xabu8; 32]).unwrap();
    assert_eq!(d.to_bytes(), [0xab; 32]);
}

#[test]
fn digest_display_is_colon_hex() {
    let d = Digest::from([0x0fu8; 32]);
    let s = d.to_string();

    assert!(s.starts_with("0F:0F:"));
    assert_eq!(s.len(), 32 * 3 - 1);
}

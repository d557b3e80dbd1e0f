use condensation_crypto::primitives::{BIG_INTEGER_BYTES, BigInteger, decode, encode, encode_padded};
use condensation_crypto::{CryptoError, random_bytes};
use num_bigint::BigUint;

fn big(bytes: &[u8]) -> BigInteger {
    decode(bytes).unwrap()
}

fn reference(value: &BigInteger) -> BigUint {
    BigUint::from_bytes_be(&value.to_bytes())
}

fn from_reference(value: &BigUint) -> BigInteger {
    big(&value.to_bytes_be())
}

fn random_value(len: i64) -> BigInteger {
    big(&random_bytes(len))
}

// -------------------------------------------------------
// CODEC
// -------------------------------------------------------

#[test]
fn zero_encodes_as_empty() {
    assert!(encode(&BigInteger::ZERO, 0).unwrap().is_empty());
    assert_eq!(decode(&[]).unwrap(), BigInteger::ZERO);
}

#[test]
fn decode_encode_round_trip() {
    for len in [1i64, 2, 3, 4, 5, 31, 32, 33, 127, 128, 255, 256] {
        let bytes = random_bytes(len);
        let value = big(&bytes);

        let encoded = encode(&value, BIG_INTEGER_BYTES).unwrap();
        assert_eq!(decode(&encoded).unwrap(), value);

        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        assert_eq!(encoded, bytes[start..]);
    }
}

#[test]
fn encoding_has_no_leading_zero() {
    let value = big(&[0, 0, 0, 1, 0]);

    assert_eq!(value.to_bytes(), vec![1, 0]);
    assert_eq!(value.byte_length(), 2);
    assert_eq!(value.bit_length(), 9);
}

#[test]
fn encode_rejects_insufficient_capacity() {
    let value = big(&[1, 2, 3]);

    assert_eq!(
        encode(&value, 2),
        Err(CryptoError::CapacityExceeded {
            required: 3,
            capacity: 2
        })
    );
    assert!(encode_padded(&value, 2).is_err());
}

#[test]
fn encode_padded_left_pads() {
    let value = big(&[0xab, 0xcd]);
    assert_eq!(encode_padded(&value, 5).unwrap(), vec![0, 0, 0, 0xab, 0xcd]);
    assert_eq!(encode_padded(&BigInteger::ZERO, 3).unwrap(), vec![0, 0, 0]);
}

#[test]
fn decode_rejects_more_than_256_significant_bytes() {
    let mut bytes = vec![0u8; 257];
    bytes[0] = 1;

    assert_eq!(
        decode(&bytes),
        Err(CryptoError::CapacityExceeded {
            required: 257,
            capacity: 256
        })
    );

    // Leading zeros do not count against the capacity.
    let mut padded = vec![0u8; 300];
    padded[299] = 7;
    assert_eq!(decode(&padded).unwrap(), BigInteger::from_u32(7));
}

#[test]
fn display_is_colon_hex() {
    assert_eq!(big(&[0x01, 0xab]).to_string(), "01:AB");
    assert_eq!(BigInteger::ZERO.to_string(), "00");
}

#[test]
fn debug_shows_only_the_bit_length() {
    let value = big(&[0x01, 0xab, 0xcd]);

    assert_eq!(format!("{value:?}"), "BigInteger(17 bits)");
    assert_eq!(format!("{:?}", BigInteger::ZERO), "BigInteger(0 bits)");
}

// -------------------------------------------------------
// ARITHMETIC AGAINST num-bigint
// -------------------------------------------------------

#[test]
fn multiplication_matches_reference() {
    for _ in 0..16 {
        let a = random_value(128);
        let b = random_value(127);

        let product = a.checked_mul(&b).unwrap();
        assert_eq!(reference(&product), reference(&a) * reference(&b));
    }
}

#[test]
fn multiplication_overflow_is_reported() {
    let a = random_value(200);
    let mut b_bytes = random_bytes(100);
    b_bytes[0] |= 0x80;
    let b = big(&b_bytes);

    let mut a_bytes = a.to_bytes();
    a_bytes[0] |= 0x80;

    assert!(big(&a_bytes).checked_mul(&b).is_none());
}

#[test]
fn division_matches_reference() {
    for divisor_len in [1i64, 4, 8, 100, 200, 256] {
        let a = random_value(256);
        let b = random_value(divisor_len);

        if b.is_zero() {
            continue;
        }

        let (q, r) = a.div_rem(&b).unwrap();

        assert_eq!(reference(&q), reference(&a) / reference(&b));
        assert_eq!(reference(&r), reference(&a) % reference(&b));
    }

    assert!(BigInteger::ONE.div_rem(&BigInteger::ZERO).is_none());
}

#[test]
fn addition_and_subtraction() {
    let a = random_value(100);
    let b = random_value(99);

    let sum = a.checked_add(&b).unwrap();
    assert_eq!(reference(&sum), reference(&a) + reference(&b));
    assert_eq!(sum.checked_sub(&b).unwrap(), a);

    assert!(b.checked_sub(&sum).is_none());

    let max = big(&[0xff; 256]);
    assert!(max.checked_add(&BigInteger::ONE).is_none());
}

#[test]
fn modular_inverse_matches_reference() {
    let modulus = from_reference(&(BigUint::from(2u32).pow(1279) - 1u32));
    let e = BigInteger::from_u32(65_537);

    let inv = e.mod_inverse(&modulus).unwrap();
    let check = (reference(&inv) * reference(&e)) % reference(&modulus);

    assert_eq!(check, BigUint::from(1u32));
}

#[test]
fn modular_inverse_of_random_values() {
    // An odd prime modulus: every non-zero residue is invertible.
    let modulus = from_reference(&(BigUint::from(2u32).pow(521) - 1u32));

    for _ in 0..8 {
        let a = random_value(60);

        if a.is_zero() {
            continue;
        }

        let inv = a.mod_inverse(&modulus).unwrap();
        let check = (reference(&inv) * reference(&a)) % reference(&modulus);

        assert_eq!(check, BigUint::from(1u32));
    }
}

#[test]
fn modular_inverse_requires_coprime_operands() {
    let a = BigInteger::from_u32(6);
    let m = BigInteger::from_u32(9);

    assert!(a.mod_inverse(&m).is_none());
    assert_eq!(
        BigInteger::from_u32(17).mod_inverse(&BigInteger::from_u32(780)),
        Some(BigInteger::from_u32(413))
    );
}

#[test]
fn gcd_and_lcm() {
    let a = BigInteger::from_u64(2 * 3 * 5 * 7 * 1_000_003);
    let b = BigInteger::from_u64(3 * 7 * 11 * 1_000_003);

    assert_eq!(a.gcd(&b), BigInteger::from_u64(3 * 7 * 1_000_003));
    assert_eq!(
        a.lcm(&b).unwrap(),
        BigInteger::from_u64(2 * 3 * 5 * 7 * 11 * 1_000_003)
    );
}

#[test]
fn shifts_and_bits() {
    let value = big(&[0x80, 0, 0, 0, 0, 1]);

    assert_eq!(value.bit_length(), 48);
    assert!(value.bit(47));
    assert!(value.bit(0));
    assert!(!value.bit(1));
    assert!(!value.bit(5000));
    assert_eq!(value.shr(47), BigInteger::ONE);
    assert_eq!(value.shr(40), BigInteger::from_u32(0x80));
    assert_eq!(value.shr(4096), BigInteger::ZERO);
}

#[test]
fn ordering_follows_numeric_value() {
    let small = big(&[0xff, 0xff]);
    let large = big(&[1, 0, 0]);

    assert!(small < large);
    assert!(BigInteger::ZERO < BigInteger::ONE);
    assert_eq!(large.cmp(&large), std::cmp::Ordering::Equal);
}

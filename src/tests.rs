use crate::{apply_shift, decode, encode, size_class_start};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

#[test]
fn test_encode_empty() {
    assert!(encode(b"").is_zero());
}

#[test]
fn test_decode_zero() {
    assert_eq!(decode(&BigUint::zero()), Vec::<u8>::new());
}

#[test]
fn test_single_byte_class() {
    // 0x00..=0xff occupy 1..=256
    assert_eq!(encode(&[0x00]), BigUint::from(1u32));
    assert_eq!(encode(&[0x01]), BigUint::from(2u32));
    assert_eq!(encode(&[0xff]), BigUint::from(256u32));
    assert_eq!(decode(&BigUint::from(1u32)), vec![0x00]);
    assert_eq!(decode(&BigUint::from(256u32)), vec![0xff]);
}

#[test]
fn test_two_byte_class() {
    // 0x0000..=0xffff occupy 257..=65792, little-endian within the class
    assert_eq!(encode(&[0x00, 0x00]), BigUint::from(257u32));
    assert_eq!(encode(&[0x01, 0x00]), BigUint::from(258u32));
    assert_eq!(encode(&[0x00, 0x01]), BigUint::from(513u32));
    assert_eq!(encode(&[0xff, 0xff]), BigUint::from(65792u32));
}

#[test]
fn test_size_class_start_telescopes() {
    // start(n) = start(n-1) + 256^(n-1)
    let mut expected = BigUint::zero();
    for n in 0..64 {
        assert_eq!(size_class_start(n), expected, "length {}", n);
        expected += BigUint::one() << (8 * n);
    }
}

#[test]
fn test_roundtrip_bytes() {
    let cases: &[&[u8]] = &[
        b"",
        &[0x00],
        &[0xff],
        b"Hello, World!",
        &[0u8, 1, 2, 3, 255, 254, 253],
        &[0u8, 0, 0, 1, 2, 3],
        &[0u8; 40],
        &[0xffu8; 40],
    ];
    for &data in cases {
        assert_eq!(decode(&encode(data)), data);
    }
}

#[test]
fn test_roundtrip_trailing_zeros() {
    // Trailing zeros are the most-significant bytes of the little-endian
    // value; decode must pad them back in
    let data = &[1u8, 0, 0, 0, 0];
    assert_eq!(decode(&encode(data)), data);
}

#[test]
fn test_roundtrip_numbers() {
    // Sweep across the length-0, 1 and 2 classes and both boundaries
    for k in 0u32..=66_000 {
        let k = BigUint::from(k);
        assert_eq!(encode(&decode(&k)), k);
    }
}

#[test]
fn test_roundtrip_large_numbers() {
    for shift in [64usize, 77, 128, 1000] {
        for delta in 0u32..3 {
            let k = (BigUint::one() << shift) + delta;
            assert_eq!(encode(&decode(&k)), k);
        }
    }
}

#[test]
fn test_class_boundaries() {
    // The all-zero sequence opens its class and the all-0xff one closes it
    for n in 0..32 {
        assert_eq!(encode(&vec![0u8; n]), size_class_start(n));
        assert_eq!(
            encode(&vec![0xffu8; n]) + 1u32,
            size_class_start(n + 1),
            "length {}",
            n
        );
    }
}

#[test]
fn test_decode_at_exact_boundary() {
    // The bit-length length recovery is most fragile at n = start(len)
    for len in 1..32 {
        let start = size_class_start(len);
        assert_eq!(decode(&start), vec![0u8; len], "start of length {}", len);
        let below = &start - 1u32;
        assert_eq!(decode(&below), vec![0xffu8; len - 1], "end of length {}", len - 1);
    }
}

#[test]
fn test_encode_is_monotone_in_length() {
    let mut previous = encode(b"");
    for n in 1..20 {
        let smallest = encode(&vec![0u8; n]);
        assert!(previous < smallest);
        previous = encode(&vec![0xffu8; n]);
    }
}

#[test]
fn test_hi_newline_example() {
    // "Hi\n" = [0x48, 0x69, 0x0a]; value 0x48 + 0x69*256 + 0x0a*65536
    let data = &[0x48u8, 0x69, 0x0a];
    let expected = size_class_start(3) + BigUint::from(682_312u32);
    assert_eq!(encode(data), expected);
    assert_eq!(encode(data), BigUint::from(748_105u32));
}

#[test]
fn test_compress_to_empty_and_back() {
    let data = &[0x48u8, 0x69, 0x0a];
    let number = encode(data);
    let v = BigInt::from(748_105u32);

    // Compressing exactly `number` times lands on the empty file
    let compressed = apply_shift(&number, &v).unwrap();
    assert_eq!(decode(&compressed), Vec::<u8>::new());

    // Decompressing the empty file the same number of times restores it
    let restored = apply_shift(&BigUint::zero(), &(-v)).unwrap();
    assert_eq!(decode(&restored), data);
}

#[test]
fn test_shift_inverse_law() {
    let data = b"round trip me";
    let number = encode(data);
    for s in [0u32, 1, 2, 255, 256, 65_793] {
        let s = BigInt::from(s);
        let compressed = apply_shift(&number, &s).unwrap();
        let restored = apply_shift(&compressed, &(-&s)).unwrap();
        assert_eq!(decode(&restored), data);
    }
}

#[test]
fn test_shift_changes_length_across_classes() {
    // One step down from the shortest two-byte file is the longest
    // one-byte file
    let number = encode(&[0x00, 0x00]);
    let shifted = apply_shift(&number, &BigInt::one()).unwrap();
    assert_eq!(decode(&shifted), vec![0xff]);
}

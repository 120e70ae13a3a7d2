//! Integration tests for the public voltage_bytes API
//!
//! Exercises the documented encoding contracts end to end: literal vectors,
//! round-trip properties over randomized inputs, and boundary failures.

use num_bigint::{BigInt, BigUint};
use num_traits::One;
use rand::Rng;
use voltage_bytes::{concat, ByteBuffer, ByteBufferError};

#[test]
fn test_literal_unsigned_vectors() {
    assert_eq!(ByteBuffer::from_uint_be(0x0102u32).as_slice(), &[1, 2]);
    assert_eq!(
        ByteBuffer::from_uint_be_sized(0x0102u32, 3).unwrap().as_slice(),
        &[0, 1, 2]
    );
    assert_eq!(ByteBuffer::from_uint_le(0x0102u32).as_slice(), &[2, 1]);
    assert_eq!(
        ByteBuffer::from_uint_le_sized(0x0102u32, 3).unwrap().as_slice(),
        &[2, 1, 0]
    );
    assert!(ByteBuffer::from_uint_le(0u32).is_empty());
    assert!(ByteBuffer::from_uint_le_sized(0u32, 0).unwrap().is_empty());
    assert_eq!(
        ByteBuffer::from_uint_le_sized(0u32, 1).unwrap().as_slice(),
        &[0]
    );
}

#[test]
fn test_literal_signed_vectors() {
    assert_eq!(ByteBuffer::from_int_be(-1, 1).unwrap().as_slice(), &[255]);
    assert_eq!(
        ByteBuffer::from_int_be(-0x0103, 2).unwrap().as_slice(),
        &[254, 253]
    );
    assert_eq!(
        ByteBuffer::from_int_le(-0x0103, 3).unwrap().as_slice(),
        &[253, 254, 255]
    );
}

#[test]
fn test_equals_symmetry() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        // Small alphabet and lengths so collisions actually happen
        let a: Vec<u8> = (0..rng.gen_range(0..5)).map(|_| rng.gen::<u8>() % 3).collect();
        let b: Vec<u8> = (0..rng.gen_range(0..5)).map(|_| rng.gen::<u8>() % 3).collect();
        let buf_a = ByteBuffer::new(a.clone());
        let buf_b = ByteBuffer::new(b.clone());
        assert_eq!(buf_a.equals(&b), buf_b.equals(&a));
        assert!(buf_a.equals(&a));
    }
    assert!(ByteBuffer::new(vec![1, 2, 3]).equals(&[1, 2, 3]));
    assert!(!ByteBuffer::new(vec![1, 2, 3]).equals(&[1, 2]));
}

#[test]
fn test_uint_roundtrip_random() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let len = rng.gen_range(0..32);
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let value = BigUint::from_bytes_le(&bytes);

        // Minimal encodings
        assert_eq!(ByteBuffer::from_uint_le(value.clone()).to_biguint_le(), value);
        assert_eq!(ByteBuffer::from_uint_be(value.clone()).to_biguint_be(), value);

        // Padded encodings with sufficient length
        let sized = ByteBuffer::from_uint_le_sized(value.clone(), len + 2).unwrap();
        assert_eq!(sized.len(), len + 2);
        assert_eq!(sized.to_biguint_le(), value);
        let sized = ByteBuffer::from_uint_be_sized(value.clone(), len + 2).unwrap();
        assert_eq!(sized.to_biguint_be(), value);
    }
}

#[test]
fn test_be_is_reverse_of_le() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let value: u64 = rng.gen();
        let length = rng.gen_range(8..12);

        let le = ByteBuffer::from_uint_le_sized(value, length).unwrap();
        let be = ByteBuffer::from_uint_be_sized(value, length).unwrap();
        let mut reversed = le.into_inner();
        reversed.reverse();
        assert_eq!(be.as_slice(), reversed.as_slice());

        let signed = rng.gen::<i64>();
        let le = ByteBuffer::from_int_le(signed, 8).unwrap();
        let be = ByteBuffer::from_int_be(signed, 8).unwrap();
        let mut reversed = le.into_inner();
        reversed.reverse();
        assert_eq!(be.as_slice(), reversed.as_slice());
    }
}

#[test]
fn test_signed_roundtrip_native_width() {
    let mut rng = rand::thread_rng();
    let mut values: Vec<i64> = (0..100).map(|_| rng.gen()).collect();
    values.extend([0, 1, -1, i64::MIN, i64::MAX]);
    for value in values {
        // An 8-byte two's-complement encoding is exactly the u64 bit pattern
        let le = ByteBuffer::from_int_le(value, 8).unwrap();
        assert_eq!(le.get_u64_le(0).unwrap(), value as u64);
        let be = ByteBuffer::from_int_be(value, 8).unwrap();
        assert_eq!(be.get_u64_be(0).unwrap(), value as u64);
    }
}

#[test]
fn test_signed_roundtrip_wide() {
    // Wider than any native integer: 13 bytes = 104 bits
    let value = -(BigInt::one() << 100u32) - BigInt::one();
    let buffer = ByteBuffer::from_int_le(value.clone(), 13).unwrap();
    assert_eq!(buffer.len(), 13);
    let reinterpreted = BigInt::from(buffer.to_biguint_le()) - (BigInt::one() << 104u32);
    assert_eq!(reinterpreted, value);

    let value = (BigInt::one() << 90u32) + BigInt::from(7);
    let buffer = ByteBuffer::from_int_be(value.clone(), 12).unwrap();
    assert_eq!(BigInt::from(buffer.to_biguint_be()), value);
}

#[test]
fn test_concat_layout() {
    let a = vec![1u8, 2, 3];
    let b = vec![4u8];
    let c = vec![5u8, 6];
    let joined = concat(&[a.clone(), b.clone(), c.clone()]);
    assert_eq!(joined.len(), a.len() + b.len() + c.len());
    assert_eq!(&joined[0..a.len()], a.as_slice());
    assert_eq!(&joined[a.len()..a.len() + b.len()], b.as_slice());
    assert_eq!(&joined[a.len() + b.len()..], c.as_slice());

    let empty: [Vec<u8>; 0] = [];
    assert!(concat(&empty).is_empty());
}

#[test]
fn test_padding_properties() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let content: Vec<u8> = (0..rng.gen_range(0..6)).map(|_| rng.gen()).collect();
        let buffer = ByteBuffer::new(content.clone());

        let padded = buffer.pad_start(8);
        assert_eq!(padded.len(), 8);
        assert_eq!(&padded[8 - content.len()..], content.as_slice());
        assert!(padded[..8 - content.len()].iter().all(|&b| b == 0));

        let padded = buffer.pad_end(8);
        assert_eq!(padded.len(), 8);
        assert_eq!(&padded[..content.len()], content.as_slice());
        assert!(padded[content.len()..].iter().all(|&b| b == 0));
    }

    // Already long enough: content unchanged
    let buffer = ByteBuffer::new(vec![7, 8, 9]);
    assert_eq!(buffer.pad_start(3).as_ref(), &[7, 8, 9]);
    assert_eq!(buffer.pad_end(2).as_ref(), &[7, 8, 9]);
}

#[test]
fn test_boundary_failures() {
    let mut buffer = ByteBuffer::zeroed(4);
    assert!(matches!(
        buffer.set_u16_be(0, 0x10000),
        Err(ByteBufferError::OutOfRange(_))
    ));
    assert!(matches!(
        ByteBuffer::from_int_le(128, 1),
        Err(ByteBufferError::OutOfRange(_))
    ));
    assert!(matches!(
        ByteBuffer::from_int_le(-129, 1),
        Err(ByteBufferError::OutOfRange(_))
    ));
    assert!(matches!(
        buffer.get_u64_be(0),
        Err(ByteBufferError::OutOfBounds(_))
    ));
    assert!(matches!(
        buffer.get_u16_le(3),
        Err(ByteBufferError::OutOfBounds(_))
    ));
}

#[test]
fn test_serde_roundtrip() {
    let buffer = ByteBuffer::new(vec![0x01, 0x02, 0xFF]);
    let json = serde_json::to_string(&buffer).unwrap();
    assert_eq!(json, "[1,2,255]");
    let decoded: ByteBuffer = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, buffer);
}

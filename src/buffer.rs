//! Fixed-length byte buffer with endian-aware integer accessors
//!
//! `ByteBuffer` wraps an owned byte sequence and provides:
//! - Bounds-checked fixed-width reads and writes (u8/u16/u32/u64, both orders)
//! - Zero-padding to a minimum length
//! - Whole-buffer conversion to arbitrary-precision unsigned integers
//! - Minimal and fixed-length encodings of unsigned integers
//! - Two's-complement encodings of signed integers
//!
//! All operations are pure, synchronous transformations on in-memory bytes;
//! the only side effect is the explicit in-place mutation performed by the
//! `set_*` family on the buffer's own storage.
//!
//! ```rust
//! use voltage_bytes::{ByteBuffer, ByteOrder};
//!
//! let mut buffer = ByteBuffer::zeroed(4);
//! buffer.set_u16_be(0, 0x0102)?.set_u16_le(2, 0x0304)?;
//! assert_eq!(buffer.as_slice(), &[0x01, 0x02, 0x04, 0x03]);
//! assert_eq!(buffer.get_u16(0, ByteOrder::BigEndian)?, 0x0102);
//! # Ok::<(), voltage_bytes::ByteBufferError>(())
//! ```

use std::borrow::Cow;
use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::byte_order::ByteOrder;
use crate::concat::concat;
use crate::error::{ByteBufferError, Result};

/// Owned byte sequence with endian-aware integer accessors
///
/// The buffer binds to exactly one byte sequence for its lifetime: the
/// contents may be mutated through the setters, but the buffer never
/// rebinds to different storage. One owner per buffer; no internal locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Wrap an existing byte sequence
    pub fn new(bytes: Vec<u8>) -> Self {
        ByteBuffer { bytes }
    }

    /// Allocate a buffer of `length` zero bytes
    pub fn zeroed(length: usize) -> Self {
        ByteBuffer {
            bytes: vec![0; length],
        }
    }

    /// Buffer length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the underlying bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutably borrow the underlying bytes
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Consume the buffer and return the underlying bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }

    fn check_bounds(&self, offset: usize, width: usize) -> Result<()> {
        let end = offset.checked_add(width).ok_or_else(|| {
            ByteBufferError::out_of_bounds(format!(
                "{width}-byte access at offset {offset} overflows"
            ))
        })?;
        if end > self.bytes.len() {
            return Err(ByteBufferError::out_of_bounds(format!(
                "{width}-byte access at offset {offset} exceeds buffer length {}",
                self.bytes.len()
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Fixed-width reads
    // ========================================================================

    /// Read a u8 at `offset`
    pub fn get_u8(&self, offset: usize) -> Result<u8> {
        self.check_bounds(offset, 1)?;
        Ok(self.bytes[offset])
    }

    /// Read a u16 at `offset` in the given byte order
    pub fn get_u16(&self, offset: usize, order: ByteOrder) -> Result<u16> {
        self.check_bounds(offset, 2)?;
        let raw = [self.bytes[offset], self.bytes[offset + 1]];
        Ok(match order {
            ByteOrder::BigEndian => u16::from_be_bytes(raw),
            ByteOrder::LittleEndian => u16::from_le_bytes(raw),
        })
    }

    /// Read a big-endian u16 at `offset`
    pub fn get_u16_be(&self, offset: usize) -> Result<u16> {
        self.get_u16(offset, ByteOrder::BigEndian)
    }

    /// Read a little-endian u16 at `offset`
    pub fn get_u16_le(&self, offset: usize) -> Result<u16> {
        self.get_u16(offset, ByteOrder::LittleEndian)
    }

    /// Read a u32 at `offset` in the given byte order
    pub fn get_u32(&self, offset: usize, order: ByteOrder) -> Result<u32> {
        self.check_bounds(offset, 4)?;
        let raw = [
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
            self.bytes[offset + 3],
        ];
        Ok(match order {
            ByteOrder::BigEndian => u32::from_be_bytes(raw),
            ByteOrder::LittleEndian => u32::from_le_bytes(raw),
        })
    }

    /// Read a big-endian u32 at `offset`
    pub fn get_u32_be(&self, offset: usize) -> Result<u32> {
        self.get_u32(offset, ByteOrder::BigEndian)
    }

    /// Read a little-endian u32 at `offset`
    pub fn get_u32_le(&self, offset: usize) -> Result<u32> {
        self.get_u32(offset, ByteOrder::LittleEndian)
    }

    /// Read a u64 at `offset` in the given byte order
    pub fn get_u64(&self, offset: usize, order: ByteOrder) -> Result<u64> {
        self.check_bounds(offset, 8)?;
        let raw = [
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
            self.bytes[offset + 3],
            self.bytes[offset + 4],
            self.bytes[offset + 5],
            self.bytes[offset + 6],
            self.bytes[offset + 7],
        ];
        Ok(match order {
            ByteOrder::BigEndian => u64::from_be_bytes(raw),
            ByteOrder::LittleEndian => u64::from_le_bytes(raw),
        })
    }

    /// Read a big-endian u64 at `offset`
    pub fn get_u64_be(&self, offset: usize) -> Result<u64> {
        self.get_u64(offset, ByteOrder::BigEndian)
    }

    /// Read a little-endian u64 at `offset`
    pub fn get_u64_le(&self, offset: usize) -> Result<u64> {
        self.get_u64(offset, ByteOrder::LittleEndian)
    }

    // ========================================================================
    // Fixed-width writes
    // ========================================================================

    /// Write a u8 at `offset`
    pub fn set_u8(&mut self, offset: usize, value: u8) -> Result<&mut Self> {
        self.check_bounds(offset, 1)?;
        self.bytes[offset] = value;
        Ok(self)
    }

    /// Write `value` as a u16 at `offset` in the given byte order
    ///
    /// Accepts a wide value so that out-of-width inputs are reported as
    /// [`ByteBufferError::OutOfRange`] rather than silently truncated.
    /// Returns the buffer for chaining.
    pub fn set_u16(&mut self, offset: usize, value: u64, order: ByteOrder) -> Result<&mut Self> {
        if value > u64::from(u16::MAX) {
            return Err(ByteBufferError::out_of_range(format!(
                "Value {value} is out of bounds for a 16-bit unsigned integer"
            )));
        }
        self.check_bounds(offset, 2)?;
        let raw = match order {
            ByteOrder::BigEndian => (value as u16).to_be_bytes(),
            ByteOrder::LittleEndian => (value as u16).to_le_bytes(),
        };
        self.bytes[offset..offset + 2].copy_from_slice(&raw);
        Ok(self)
    }

    /// Write a big-endian u16 at `offset`
    pub fn set_u16_be(&mut self, offset: usize, value: u64) -> Result<&mut Self> {
        self.set_u16(offset, value, ByteOrder::BigEndian)
    }

    /// Write a little-endian u16 at `offset`
    pub fn set_u16_le(&mut self, offset: usize, value: u64) -> Result<&mut Self> {
        self.set_u16(offset, value, ByteOrder::LittleEndian)
    }

    /// Write `value` as a u32 at `offset` in the given byte order
    pub fn set_u32(&mut self, offset: usize, value: u64, order: ByteOrder) -> Result<&mut Self> {
        if value > u64::from(u32::MAX) {
            return Err(ByteBufferError::out_of_range(format!(
                "Value {value} is out of bounds for a 32-bit unsigned integer"
            )));
        }
        self.check_bounds(offset, 4)?;
        let raw = match order {
            ByteOrder::BigEndian => (value as u32).to_be_bytes(),
            ByteOrder::LittleEndian => (value as u32).to_le_bytes(),
        };
        self.bytes[offset..offset + 4].copy_from_slice(&raw);
        Ok(self)
    }

    /// Write a big-endian u32 at `offset`
    pub fn set_u32_be(&mut self, offset: usize, value: u64) -> Result<&mut Self> {
        self.set_u32(offset, value, ByteOrder::BigEndian)
    }

    /// Write a little-endian u32 at `offset`
    pub fn set_u32_le(&mut self, offset: usize, value: u64) -> Result<&mut Self> {
        self.set_u32(offset, value, ByteOrder::LittleEndian)
    }

    /// Write `value` as a u64 at `offset` in the given byte order
    ///
    /// The full u64 range is valid for an 8-byte write, so only the offset
    /// is checked.
    pub fn set_u64(&mut self, offset: usize, value: u64, order: ByteOrder) -> Result<&mut Self> {
        self.check_bounds(offset, 8)?;
        let raw = match order {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        };
        self.bytes[offset..offset + 8].copy_from_slice(&raw);
        Ok(self)
    }

    /// Write a big-endian u64 at `offset`
    pub fn set_u64_be(&mut self, offset: usize, value: u64) -> Result<&mut Self> {
        self.set_u64(offset, value, ByteOrder::BigEndian)
    }

    /// Write a little-endian u64 at `offset`
    pub fn set_u64_le(&mut self, offset: usize, value: u64) -> Result<&mut Self> {
        self.set_u64(offset, value, ByteOrder::LittleEndian)
    }

    // ========================================================================
    // Padding
    // ========================================================================

    /// Zero-pad at the start up to `length` bytes
    ///
    /// Returns the bytes unchanged (borrowed, no copy) when the buffer is
    /// already at least `length` bytes long; otherwise returns a new owned
    /// sequence of exactly `length` bytes with zeros before the original
    /// content. Never mutates the buffer.
    pub fn pad_start(&self, length: usize) -> Cow<'_, [u8]> {
        if self.bytes.len() >= length {
            return Cow::Borrowed(self.bytes.as_slice());
        }
        trace!(
            "Padding {}-byte buffer at the start to {} bytes",
            self.bytes.len(),
            length
        );
        let zeros = vec![0u8; length - self.bytes.len()];
        Cow::Owned(concat(&[zeros.as_slice(), self.bytes.as_slice()]))
    }

    /// Zero-pad at the end up to `length` bytes
    ///
    /// Same contract as [`pad_start`](Self::pad_start), with the zeros
    /// after the original content.
    pub fn pad_end(&self, length: usize) -> Cow<'_, [u8]> {
        if self.bytes.len() >= length {
            return Cow::Borrowed(self.bytes.as_slice());
        }
        trace!(
            "Padding {}-byte buffer at the end to {} bytes",
            self.bytes.len(),
            length
        );
        let zeros = vec![0u8; length - self.bytes.len()];
        Cow::Owned(concat(&[self.bytes.as_slice(), zeros.as_slice()]))
    }

    // ========================================================================
    // Arbitrary-precision conversion
    // ========================================================================

    /// Interpret the whole buffer as a big-endian unsigned integer
    ///
    /// An empty buffer yields zero.
    pub fn to_biguint_be(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Interpret the whole buffer as a little-endian unsigned integer
    ///
    /// An empty buffer yields zero.
    pub fn to_biguint_le(&self) -> BigUint {
        BigUint::from_bytes_le(&self.bytes)
    }

    // ========================================================================
    // Fixed-width constructors
    // ========================================================================

    /// Build a 2-byte buffer holding `value` in the given byte order
    pub fn from_u16(value: u64, order: ByteOrder) -> Result<ByteBuffer> {
        let mut buffer = ByteBuffer::zeroed(2);
        buffer.set_u16(0, value, order)?;
        Ok(buffer)
    }

    /// Build a 2-byte big-endian buffer holding `value`
    pub fn from_u16_be(value: u64) -> Result<ByteBuffer> {
        Self::from_u16(value, ByteOrder::BigEndian)
    }

    /// Build a 2-byte little-endian buffer holding `value`
    pub fn from_u16_le(value: u64) -> Result<ByteBuffer> {
        Self::from_u16(value, ByteOrder::LittleEndian)
    }

    /// Build a 4-byte buffer holding `value` in the given byte order
    pub fn from_u32(value: u64, order: ByteOrder) -> Result<ByteBuffer> {
        let mut buffer = ByteBuffer::zeroed(4);
        buffer.set_u32(0, value, order)?;
        Ok(buffer)
    }

    /// Build a 4-byte big-endian buffer holding `value`
    pub fn from_u32_be(value: u64) -> Result<ByteBuffer> {
        Self::from_u32(value, ByteOrder::BigEndian)
    }

    /// Build a 4-byte little-endian buffer holding `value`
    pub fn from_u32_le(value: u64) -> Result<ByteBuffer> {
        Self::from_u32(value, ByteOrder::LittleEndian)
    }

    /// Build an 8-byte buffer holding `value` in the given byte order
    pub fn from_u64(value: u64, order: ByteOrder) -> Result<ByteBuffer> {
        let mut buffer = ByteBuffer::zeroed(8);
        buffer.set_u64(0, value, order)?;
        Ok(buffer)
    }

    /// Build an 8-byte big-endian buffer holding `value`
    pub fn from_u64_be(value: u64) -> Result<ByteBuffer> {
        Self::from_u64(value, ByteOrder::BigEndian)
    }

    /// Build an 8-byte little-endian buffer holding `value`
    pub fn from_u64_le(value: u64) -> Result<ByteBuffer> {
        Self::from_u64(value, ByteOrder::LittleEndian)
    }

    // ========================================================================
    // Variable-length unsigned constructors
    // ========================================================================

    /// Minimal little-endian encoding of an unsigned integer
    ///
    /// Produces the fewest bytes needed; zero encodes to the empty buffer.
    ///
    /// ```rust
    /// use voltage_bytes::ByteBuffer;
    ///
    /// assert_eq!(ByteBuffer::from_uint_le(0x0102u32).as_slice(), &[0x02, 0x01]);
    /// assert!(ByteBuffer::from_uint_le(0u32).is_empty());
    /// ```
    pub fn from_uint_le(value: impl Into<BigUint>) -> ByteBuffer {
        let value = value.into();
        if value.is_zero() {
            return ByteBuffer::new(Vec::new());
        }
        ByteBuffer::new(value.to_bytes_le())
    }

    /// Minimal big-endian encoding of an unsigned integer
    ///
    /// The byte-reverse of [`from_uint_le`](Self::from_uint_le).
    pub fn from_uint_be(value: impl Into<BigUint>) -> ByteBuffer {
        let mut buffer = Self::from_uint_le(value);
        buffer.bytes.reverse();
        buffer
    }

    /// Little-endian encoding of an unsigned integer in exactly `length` bytes
    ///
    /// Zero-pads at the high-order end; fails with
    /// [`ByteBufferError::OutOfRange`] when the value needs more than
    /// `length` bytes.
    pub fn from_uint_le_sized(value: impl Into<BigUint>, length: usize) -> Result<ByteBuffer> {
        let value = value.into();
        let mut bytes = if value.is_zero() {
            Vec::new()
        } else {
            value.to_bytes_le()
        };
        if bytes.len() > length {
            return Err(ByteBufferError::out_of_range(format!(
                "Value {value} is out of bounds for a {length}-byte unsigned integer"
            )));
        }
        bytes.resize(length, 0);
        Ok(ByteBuffer::new(bytes))
    }

    /// Big-endian encoding of an unsigned integer in exactly `length` bytes
    ///
    /// The byte-reverse of [`from_uint_le_sized`](Self::from_uint_le_sized).
    pub fn from_uint_be_sized(value: impl Into<BigUint>, length: usize) -> Result<ByteBuffer> {
        let mut buffer = Self::from_uint_le_sized(value, length)?;
        buffer.bytes.reverse();
        Ok(buffer)
    }

    // ========================================================================
    // Signed constructors (two's complement)
    // ========================================================================

    /// Two's-complement little-endian encoding of a signed integer in
    /// exactly `length` bytes
    ///
    /// `length` is mandatory: sign bit placement requires knowing the total
    /// width. For positive values the limit is `2^(8*length-1) - 1`, for
    /// non-positive values `-2^(8*length-1)`; violations fail with
    /// [`ByteBufferError::OutOfRange`]. A negative value is encoded as the
    /// unsigned value `2^(8*length) + value`.
    ///
    /// ```rust
    /// use voltage_bytes::ByteBuffer;
    ///
    /// assert_eq!(ByteBuffer::from_int_le(-1, 1)?.as_slice(), &[0xFF]);
    /// # Ok::<(), voltage_bytes::ByteBufferError>(())
    /// ```
    pub fn from_int_le(value: impl Into<BigInt>, length: usize) -> Result<ByteBuffer> {
        let value = value.into();
        if length == 0 {
            return Err(ByteBufferError::invalid_argument(
                "Length must be at least 1 for a signed integer encoding",
            ));
        }
        let bits = 8 * length;
        if value > BigInt::zero() {
            let max = (BigInt::one() << (bits - 1)) - BigInt::one();
            if value > max {
                return Err(ByteBufferError::out_of_range(format!(
                    "Value {value} is out of bounds for a {length}-byte signed integer"
                )));
            }
        } else {
            let min = -(BigInt::one() << (bits - 1));
            if value < min {
                return Err(ByteBufferError::out_of_range(format!(
                    "Value {value} is out of bounds for a {length}-byte signed integer"
                )));
            }
        }
        let unsigned = if value < BigInt::zero() {
            (BigInt::one() << bits) + &value
        } else {
            value.clone()
        };
        // Non-negative by construction; the range check above guarantees it
        // also fits in `length` bytes.
        let unsigned = unsigned.to_biguint().ok_or_else(|| {
            ByteBufferError::out_of_range(format!(
                "Value {value} cannot be encoded as a {length}-byte unsigned integer"
            ))
        })?;
        Self::from_uint_le_sized(unsigned, length)
    }

    /// Two's-complement big-endian encoding of a signed integer in exactly
    /// `length` bytes
    ///
    /// The byte-reverse of [`from_int_le`](Self::from_int_le).
    pub fn from_int_be(value: impl Into<BigInt>, length: usize) -> Result<ByteBuffer> {
        let mut buffer = Self::from_int_le(value, length)?;
        buffer.bytes.reverse();
        Ok(buffer)
    }

    // ========================================================================
    // Equality
    // ========================================================================

    /// Structural equality against a byte slice
    ///
    /// False when the lengths differ, otherwise bytewise comparison.
    pub fn equals(&self, other: &[u8]) -> bool {
        self.bytes.as_slice() == other
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        ByteBuffer::new(bytes)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        ByteBuffer::new(bytes.to_vec())
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes.as_slice() == other
    }
}

impl PartialEq<&[u8]> for ByteBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes.as_slice() == *other
    }
}

impl PartialEq<Vec<u8>> for ByteBuffer {
    fn eq(&self, other: &Vec<u8>) -> bool {
        &self.bytes == other
    }
}

impl PartialEq<ByteBuffer> for [u8] {
    fn eq(&self, other: &ByteBuffer) -> bool {
        self == other.bytes.as_slice()
    }
}

impl fmt::Display for ByteBuffer {
    /// Hex rendering of the contents
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.bytes))
    }
}

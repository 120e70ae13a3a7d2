//! Byte order representation for buffer accessors
//!
//! Provides a type-safe enum for the two byte orderings the buffer
//! accessors support, avoiding stringly-typed endianness parameters.

use serde::{Deserialize, Serialize};

/// Byte order for multi-byte integer accessors
///
/// For the 32-bit value `0x12345678`:
/// - `BigEndian`: [0x12, 0x34, 0x56, 0x78]
/// - `LittleEndian`: [0x78, 0x56, 0x34, 0x12]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Big-endian: most significant byte first
    ///
    /// Network byte order, used in most protocols.
    BigEndian,

    /// Little-endian: least significant byte first
    ///
    /// Intel x86 native byte order.
    LittleEndian,
}

impl ByteOrder {
    /// Convert from common string representations
    ///
    /// Supports:
    /// - "BE", "BIG_ENDIAN" → BigEndian
    /// - "LE", "LITTLE_ENDIAN" → LittleEndian
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.to_uppercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "BE" | "BIGENDIAN" => Some(Self::BigEndian),
            "LE" | "LITTLEENDIAN" => Some(Self::LittleEndian),
            _ => None,
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "Big-Endian",
            Self::LittleEndian => "Little-Endian",
        }
    }

    /// Check if this is the big-endian order
    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::BigEndian)
    }

    /// Check if this is the little-endian order
    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::LittleEndian)
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ByteOrder {
    /// Default to big-endian (network byte order)
    fn default() -> Self {
        Self::BigEndian
    }
}

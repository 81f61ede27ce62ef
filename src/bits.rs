use alloc::vec::Vec;
use core::ops::Range;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Widest range [`BitBuffer::bits`] can pack into its result.
pub const MAX_EXTRACT_BITS: usize = u32::BITS as usize;

/// Immutable byte buffer addressed bit by bit, most significant bit first
/// within each byte.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct BitBuffer {
    bytes: Vec<u8>,
}

impl BitBuffer {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Returns a buffer holding `self` followed by `other`.
    pub fn concat(&self, other: &BitBuffer) -> Self {
        let mut bytes = Vec::with_capacity(self.bytes.len() + other.bytes.len());
        bytes.extend_from_slice(&self.bytes);
        bytes.extend_from_slice(&other.bytes);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Reads the half-open bit `range` as an unsigned integer.
    ///
    /// The first bit of the range becomes the most significant bit of the
    /// result and the last bit lands in bit 0.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed, ends past [`bit_len`](Self::bit_len)
    /// or spans more than [`MAX_EXTRACT_BITS`] bits.
    pub fn bits(&self, range: Range<usize>) -> u32 {
        assert!(
            range.start <= range.end,
            "bit range {}..{} is reversed",
            range.start,
            range.end
        );
        assert!(
            range.end <= self.bit_len(),
            "bit range {}..{} exceeds buffer of {} bits",
            range.start,
            range.end,
            self.bit_len()
        );
        assert!(
            range.len() <= MAX_EXTRACT_BITS,
            "bit range {}..{} is wider than {} bits",
            range.start,
            range.end,
            MAX_EXTRACT_BITS
        );

        range.fold(0u32, |acc, position| (acc << 1) | u32::from(self.bit(position)))
    }

    #[inline]
    fn bit(&self, position: usize) -> bool {
        (self.bytes[position / 8] >> (7 - position % 8)) & 1 == 1
    }
}

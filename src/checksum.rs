use sha2::{Digest, Sha256};

use crate::{bits::BitBuffer, utils::checksum_len};

/// Derives the BIP39 checksum of `entropy`.
///
/// The first `ENT / 32` bits of `SHA256(entropy)` are returned in the high
/// bits of a single byte, zero padded below, so the buffer can be appended
/// to the entropy directly. Only the first `ENT / 32` bits are meaningful.
///
/// # Panics
///
/// Panics if `entropy` is longer than 32 bytes, since the checksum would no
/// longer fit in one byte.
pub fn derive_checksum(entropy: &[u8]) -> BitBuffer {
    let cs_bits = checksum_len(entropy.len() * 8);
    assert!(
        cs_bits <= 8,
        "checksum of {cs_bits} bits does not fit in a single byte"
    );

    let hash = Sha256::digest(entropy);
    let checksum = BitBuffer::from_bytes(&hash).bits(0..cs_bits) << (8 - cs_bits);

    BitBuffer::from_bytes(&[checksum as u8])
}

#[cfg(test)]
mod tests_checksum {
    use super::*;

    #[test]
    fn test_all_ones_128() {
        // SHA256(ff * 16) starts with 0x5a
        let checksum = derive_checksum(&[0xFF; 16]);
        assert_eq!(checksum.as_bytes(), &[0x50]);
        assert_eq!(checksum.bits(0..4), 0x5);
    }

    #[test]
    fn test_zeros_128() {
        // SHA256(00 * 16) starts with 0x37
        let checksum = derive_checksum(&[0u8; 16]);
        assert_eq!(checksum.as_bytes(), &[0x30]);
    }

    #[test]
    fn test_checksum_matches_hash_prefix() {
        for len in [16usize, 20, 24, 28, 32] {
            let entropy: [u8; 32] = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
            let entropy = &entropy[..len];
            let cs_bits = len * 8 / 32;
            let hash = Sha256::digest(entropy);

            let checksum = derive_checksum(entropy);

            assert_eq!(checksum.bit_len(), 8);
            assert_eq!(checksum.bits(0..cs_bits), u32::from(hash[0] >> (8 - cs_bits)));
            assert_eq!(checksum.bits(cs_bits..8), 0);
        }
    }

    #[test]
    fn test_full_byte_checksum() {
        let entropy = [0x42; 32];
        let hash = Sha256::digest(entropy);
        assert_eq!(derive_checksum(&entropy).as_bytes(), &[hash[0]]);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_oversized_entropy() {
        derive_checksum(&[0u8; 36]);
    }
}

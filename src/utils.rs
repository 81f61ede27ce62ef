pub const MIN_ENTROPY_BITS: usize = 128;
pub const MAX_ENTROPY_BITS: usize = 256;
pub const BITS_PER_WORD: usize = 11;

#[inline]
pub fn is_invalid_strength(entropy_bits: usize) -> bool {
    entropy_bits < MIN_ENTROPY_BITS || entropy_bits % 32 != 0 || entropy_bits > MAX_ENTROPY_BITS
}

/// Number of checksum bits appended to `entropy_bits` of entropy.
#[inline]
pub fn checksum_len(entropy_bits: usize) -> usize {
    entropy_bits / 32
}

#[inline]
pub fn word_count(entropy_bits: usize) -> usize {
    (entropy_bits + checksum_len(entropy_bits)) / BITS_PER_WORD
}

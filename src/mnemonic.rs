use alloc::{string::String, vec::Vec};
use core::{convert::Infallible, fmt, slice, str::FromStr};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    bits::BitBuffer,
    checksum::derive_checksum,
    errors::Bip39Error,
    rng::Rng,
    seed::{derive_seed, Seed},
    utils::{checksum_len, is_invalid_strength, BITS_PER_WORD},
    wordlist::Wordlist,
};

/// Splits `entropy` plus its checksum into 11-bit word indices.
pub fn word_indices(entropy: &[u8]) -> Result<Vec<u16>, Bip39Error> {
    let nb_bits = entropy.len() * 8;
    if is_invalid_strength(nb_bits) {
        return Err(Bip39Error::InvalidStrength(nb_bits));
    }

    let total = BitBuffer::from_bytes(entropy).concat(&derive_checksum(entropy));
    let total_bits = nb_bits + checksum_len(nb_bits);

    let indices = (0..total_bits / BITS_PER_WORD)
        .map(|i| {
            let start = i * BITS_PER_WORD;
            let end = (start + BITS_PER_WORD).min(total.bit_len());
            total.bits(start..end) as u16
        })
        .collect();
    Ok(indices)
}

/// An ordered sequence of mnemonic words.
///
/// Mnemonics built with [`from_words`](Self::from_words) or
/// [`from_phrase`](Self::from_phrase) are taken as given; nothing checks the
/// words against a wordlist or the checksum.
#[derive(PartialEq, Eq, Clone)]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct Mnemonic {
    words: Vec<String>,
}

pub struct MnemonicIter<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iterator for MnemonicIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MnemonicIter<'_> {}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, word) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.words.len())
            .finish_non_exhaustive()
    }
}

impl FromStr for Mnemonic {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_phrase(s))
    }
}

impl Mnemonic {
    pub fn from_entropy(wordlist: &Wordlist<'_>, entropy: &[u8]) -> Result<Self, Bip39Error> {
        let words = word_indices(entropy)?
            .into_iter()
            .map(|index| wordlist.word_at(usize::from(index)).map(String::from))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            language = %wordlist.language(),
            entropy_bits = entropy.len() * 8,
            word_count = words.len(),
            "encoded entropy as mnemonic"
        );
        Ok(Mnemonic { words })
    }

    /// Like [`from_entropy`](Self::from_entropy), with the entropy given as a
    /// hex string.
    pub fn from_hex_entropy(wordlist: &Wordlist<'_>, entropy_hex: &str) -> Result<Self, Bip39Error> {
        let entropy = hex::decode(entropy_hex)?;
        #[cfg(feature = "zeroize")]
        let entropy = zeroize::Zeroizing::new(entropy);

        Self::from_entropy(wordlist, &entropy)
    }

    /// Draws `strength` bits of entropy from `rng` and encodes them.
    ///
    /// The strength is checked before the source is called. A failing source,
    /// or one returning any other number of bytes than requested, fails the
    /// whole call.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        wordlist: &Wordlist<'_>,
        strength: usize,
    ) -> Result<Self, Bip39Error> {
        if is_invalid_strength(strength) {
            return Err(Bip39Error::InvalidStrength(strength));
        }

        let requested = strength / 8;
        let entropy = rng.generate(requested).map_err(|e| {
            tracing::warn!(strength, reason = e.reason(), "random source failed");
            Bip39Error::RandomnessFailure(e)
        })?;
        #[cfg(feature = "zeroize")]
        let entropy = zeroize::Zeroizing::new(entropy);

        if entropy.len() != requested {
            tracing::warn!(
                requested,
                received = entropy.len(),
                "random source returned the wrong number of bytes"
            );
            return Err(Bip39Error::RandomnessLengthMismatch {
                requested,
                received: entropy.len(),
            });
        }

        Self::from_entropy(wordlist, &entropy)
    }

    /// [`generate`](Self::generate) with the operating system generator.
    #[cfg(feature = "std")]
    pub fn generate_secure(wordlist: &Wordlist<'_>, strength: usize) -> Result<Self, Bip39Error> {
        Self::generate(&mut crate::rng::SecureRng, wordlist, strength)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Mnemonic {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits `phrase` on single spaces, so `phrase()` gives back the input.
    pub fn from_phrase(phrase: &str) -> Self {
        Self::from_words(phrase.split(' '))
    }

    pub fn iter(&self) -> MnemonicIter<'_> {
        MnemonicIter {
            inner: self.words.iter(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    pub fn to_seed(&self, passphrase: &str) -> Result<Seed, Bip39Error> {
        derive_seed(self.iter(), passphrase)
    }
}

#[cfg(test)]
mod tests_mnemonic {
    use super::*;
    use crate::errors::RngError;
    use alloc::{format, string::ToString, vec};
    use hex::FromHexError;

    const PROXY_BYTES: &[u8] = b"qwertyuiopasdfghjklzxcvbnm[];,./";

    struct ProxyRng;

    impl Rng for ProxyRng {
        fn generate(&mut self, len: usize) -> Result<Vec<u8>, RngError> {
            Ok(PROXY_BYTES[..len].to_vec())
        }
    }

    #[test]
    fn test_word_indices_zero_entropy() {
        let indices = word_indices(&[0u8; 16]).unwrap();
        assert_eq!(indices.len(), 12);
        assert!(indices[..11].iter().all(|&i| i == 0));
        // SHA256(00 * 16) starts with 0b0011
        assert_eq!(indices[11], 3);
    }

    #[test]
    fn test_word_indices_lengths() {
        for (bytes, words) in [(16, 12), (20, 15), (24, 18), (28, 21), (32, 24)] {
            let indices = word_indices(&vec![0xA5; bytes]).unwrap();
            assert_eq!(indices.len(), words);
            assert!(indices.iter().all(|&i| i < 2048));
        }
    }

    #[test]
    fn test_from_entropy_all_ones() {
        let mnemonic = Mnemonic::from_entropy(&Wordlist::english(), &[0xFF; 16]).unwrap();
        assert_eq!(
            mnemonic.phrase(),
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong"
        );
    }

    #[test]
    fn test_from_hex_entropy() {
        let mnemonic =
            Mnemonic::from_hex_entropy(&Wordlist::english(), "ffffffffffffffffffffffffffffffff")
                .unwrap();
        assert_eq!(mnemonic.word_count(), 12);
        assert_eq!(mnemonic.words()[11], "wrong");

        let upper =
            Mnemonic::from_hex_entropy(&Wordlist::english(), "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF")
                .unwrap();
        assert_eq!(upper, mnemonic);
    }

    #[test]
    fn test_from_hex_entropy_errors() {
        let wordlist = Wordlist::english();
        assert_eq!(
            Mnemonic::from_hex_entropy(&wordlist, "fff"),
            Err(Bip39Error::InvalidEntropyEncoding(FromHexError::OddLength))
        );
        assert_eq!(
            Mnemonic::from_hex_entropy(&wordlist, "zz"),
            Err(Bip39Error::InvalidEntropyEncoding(
                FromHexError::InvalidHexCharacter { c: 'z', index: 0 }
            ))
        );
        assert_eq!(
            Mnemonic::from_hex_entropy(&wordlist, "abcd"),
            Err(Bip39Error::InvalidStrength(16))
        );
        assert_eq!(
            Mnemonic::from_hex_entropy(&wordlist, ""),
            Err(Bip39Error::InvalidStrength(0))
        );
    }

    #[test]
    fn test_from_entropy_bad_lengths() {
        let wordlist = Wordlist::english();
        for len in [0usize, 4, 12, 15, 17, 33, 36, 64] {
            assert_eq!(
                Mnemonic::from_entropy(&wordlist, &vec![0u8; len]),
                Err(Bip39Error::InvalidStrength(len * 8))
            );
        }
    }

    #[test]
    fn test_generate_with_proxy_rng() {
        let mnemonic = Mnemonic::generate(&mut ProxyRng, &Wordlist::english(), 128).unwrap();
        assert_eq!(
            mnemonic.phrase(),
            "imitate robot frame trophy nuclear regret saddle around inflict case oil spice"
        );

        let mnemonic = Mnemonic::generate(&mut ProxyRng, &Wordlist::english(), 160).unwrap();
        assert_eq!(
            mnemonic.phrase(),
            "imitate robot frame trophy nuclear regret saddle around inflict case oil speak \
             pluck renew trophy"
        );
    }

    #[test]
    fn test_generate_invalid_strength_skips_rng() {
        let mut calls = 0;
        let mut rng = |len: usize| -> Result<Vec<u8>, RngError> {
            calls += 1;
            Ok(vec![0; len])
        };
        for strength in [0, 96, 100, 129, 288] {
            assert_eq!(
                Mnemonic::generate(&mut rng, &Wordlist::english(), strength),
                Err(Bip39Error::InvalidStrength(strength))
            );
        }
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_generate_rng_failure() {
        let mut rng =
            |_: usize| -> Result<Vec<u8>, RngError> { Err(RngError::new("no entropy available")) };
        assert_eq!(
            Mnemonic::generate(&mut rng, &Wordlist::english(), 256),
            Err(Bip39Error::RandomnessFailure(RngError::new("no entropy available")))
        );
    }

    #[test]
    fn test_generate_short_rng() {
        let mut rng = |len: usize| -> Result<Vec<u8>, RngError> { Ok(vec![0x11; len - 1]) };
        assert_eq!(
            Mnemonic::generate(&mut rng, &Wordlist::english(), 128),
            Err(Bip39Error::RandomnessLengthMismatch {
                requested: 16,
                received: 15
            })
        );
    }

    #[test]
    fn test_generate_long_rng() {
        let mut rng = |len: usize| -> Result<Vec<u8>, RngError> { Ok(vec![0x11; len + 8]) };
        assert_eq!(
            Mnemonic::generate(&mut rng, &Wordlist::english(), 192),
            Err(Bip39Error::RandomnessLengthMismatch {
                requested: 24,
                received: 32
            })
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_generate_secure() {
        let wordlist = Wordlist::english();
        for (strength, words) in [(128, 12), (160, 15), (192, 18), (224, 21), (256, 24)] {
            let mnemonic = Mnemonic::generate_secure(&wordlist, strength).unwrap();
            assert_eq!(mnemonic.word_count(), words);
            assert!(mnemonic.iter().all(|w| wordlist.words().contains(&w)));
        }
    }

    #[test]
    fn test_from_words_is_unvalidated() {
        let mnemonic = Mnemonic::from_words(["basket", "actual"]);
        assert_eq!(mnemonic.word_count(), 2);
        assert_eq!(
            mnemonic.to_seed("").unwrap().to_hex(),
            "5cf2d4a8b0355e90295bdfc565a022a409af063d5365bb57bf74d9528f494bfa\
             4400f53d8349b80fdae44082d7f9541e1dba2b003bcfec9d0d53781ca676651f"
        );

        let anything = Mnemonic::from_words(vec!["not".to_string(), "words".to_string()]);
        assert_eq!(anything.phrase(), "not words");
    }

    #[test]
    fn test_from_phrase() {
        let mnemonic = Mnemonic::from_phrase("basket actual");
        assert_eq!(mnemonic, Mnemonic::from_words(["basket", "actual"]));
        assert_eq!("basket actual".parse::<Mnemonic>().unwrap(), mnemonic);

        let spaced = Mnemonic::from_phrase("a  b");
        assert_eq!(spaced.words(), ["a", "", "b"]);
        assert_eq!(spaced.phrase(), "a  b");
    }

    #[test]
    fn test_display_and_iter() {
        let mnemonic = Mnemonic::from_entropy(&Wordlist::english(), &[0u8; 16]).unwrap();
        assert_eq!(
            mnemonic.to_string(),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon \
             abandon about"
        );
        assert_eq!(mnemonic.to_string(), mnemonic.phrase());

        let iter = mnemonic.iter();
        assert_eq!(iter.len(), 12);
        assert_eq!(mnemonic.iter().last(), Some("about"));
    }

    #[test]
    fn test_debug_hides_words() {
        let mnemonic = Mnemonic::from_words(["basket", "actual"]);
        let debug = format!("{mnemonic:?}");
        assert_eq!(debug, "Mnemonic { word_count: 2, .. }");
    }

    #[test]
    fn test_to_seed_depends_on_passphrase() {
        let mnemonic = Mnemonic::from_entropy(&Wordlist::english(), &[0x7F; 16]).unwrap();
        let a = mnemonic.to_seed("").unwrap();
        let b = mnemonic.to_seed("nonempty").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, mnemonic.to_seed("").unwrap());
    }
}

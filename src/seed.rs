use alloc::string::String;
use core::fmt;

use unicode_normalization::UnicodeNormalization;
#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    errors::Bip39Error,
    pbkdf2::{pbkdf2_hmac_sha512, PBKDF2_ROUNDS},
};

pub const SEED_BYTE_LEN: usize = 64;

const SALT_PREFIX: &str = "mnemonic";

/// 64 bytes of key material stretched from a mnemonic and passphrase.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct Seed([u8; SEED_BYTE_LEN]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; SEED_BYTE_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Derives the BIP39 seed for a word sequence.
///
/// The words are joined with single spaces, then both the phrase and the
/// salt `"mnemonic" + passphrase` are NFKD normalized before PBKDF2 with
/// HMAC-SHA512 and 2048 rounds. Words are used as given: nothing checks
/// them against a wordlist or checksum.
pub fn derive_seed<'a, I>(words: I, passphrase: &str) -> Result<Seed, Bip39Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut phrase = String::new();
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            phrase.push(' ');
        }
        phrase.push_str(word);
    }

    let password: String = phrase.nfkd().collect();
    let salt: String = SALT_PREFIX.chars().chain(passphrase.chars()).nfkd().collect();

    let mut seed = [0u8; SEED_BYTE_LEN];
    let derived = pbkdf2_hmac_sha512(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);

    #[cfg(feature = "zeroize")]
    {
        let (mut phrase, mut password, mut salt) = (phrase, password, salt);
        phrase.zeroize();
        password.zeroize();
        salt.zeroize();
    }

    derived?;
    Ok(Seed(seed))
}

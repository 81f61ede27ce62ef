use alloc::string::String;
use hex::FromHexError;
use hmac::digest::InvalidLength;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Bip39Error {
    #[error("entropy was not between 128-256 bits or not a multiple of 32 bits: {0} bits")]
    InvalidStrength(usize),

    #[error("random source failed: {0}")]
    RandomnessFailure(RngError),

    #[error("random source returned {received} bytes, {requested} were requested")]
    RandomnessLengthMismatch { requested: usize, received: usize },

    #[error("entropy is not valid hex: {0}")]
    InvalidEntropyEncoding(FromHexError),

    #[error("no wordlist is mapped for locale {0:?}")]
    UnknownLocale(String),

    #[error("wordlist {0} is not available")]
    WordlistUnavailable(&'static str),

    #[error("word index {0} is outside the wordlist")]
    WordIndexOutOfRange(usize),

    #[error("wordlist has a duplicate word at index {0}")]
    DuplicateWord(usize),

    #[error("PBKDF2 iteration count must be positive, got {0}")]
    InvalidIterationCount(u32),

    #[error("HMAC key error: {0}")]
    HmacError(InvalidLength),
}

impl From<InvalidLength> for Bip39Error {
    fn from(error: InvalidLength) -> Self {
        Bip39Error::HmacError(error)
    }
}

impl From<FromHexError> for Bip39Error {
    fn from(error: FromHexError) -> Self {
        Bip39Error::InvalidEntropyEncoding(error)
    }
}

impl From<RngError> for Bip39Error {
    fn from(error: RngError) -> Self {
        Bip39Error::RandomnessFailure(error)
    }
}

/// Failure reported by a random byte source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct RngError {
    reason: String,
}

impl RngError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

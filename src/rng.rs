use alloc::vec::Vec;

use crate::errors::RngError;

/// Source of cryptographically secure random bytes.
///
/// Implementations report failure instead of handing back weaker
/// randomness. Closures of the shape `FnMut(usize) -> Result<Vec<u8>, RngError>`
/// implement this trait too.
pub trait Rng {
    fn generate(&mut self, len: usize) -> Result<Vec<u8>, RngError>;
}

impl<F> Rng for F
where
    F: FnMut(usize) -> Result<Vec<u8>, RngError>,
{
    fn generate(&mut self, len: usize) -> Result<Vec<u8>, RngError> {
        self(len)
    }
}

/// Operating system random number generator.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureRng;

#[cfg(feature = "std")]
impl Rng for SecureRng {
    fn generate(&mut self, len: usize) -> Result<Vec<u8>, RngError> {
        use rand::{rngs::OsRng, TryRngCore};

        let mut bytes = alloc::vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| RngError::new(e.to_string()))?;
        Ok(bytes)
    }
}

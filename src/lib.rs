#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod bits;
pub mod checksum;
pub mod errors;
pub mod languages;
pub mod mnemonic;
pub mod pbkdf2;
pub mod rng;
pub mod seed;
pub mod utils;
pub mod wordlist;

pub use errors::{Bip39Error, RngError};
pub use languages::{Language, LocaleTable};
pub use mnemonic::Mnemonic;
pub use rng::Rng;
#[cfg(feature = "std")]
pub use rng::SecureRng;
pub use seed::{derive_seed, Seed};
pub use wordlist::{BundledWordlists, Wordlist, WordlistProvider};

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha512};

use crate::errors::Bip39Error;

/// Iteration count fixed by BIP39 for mnemonic to seed stretching.
pub const PBKDF2_ROUNDS: u32 = 2048;

#[inline]
fn xor(a: &mut [u8], b: &[u8]) {
    for (a_byte, b_byte) in a.iter_mut().zip(b.iter()) {
        *a_byte ^= *b_byte;
    }
}

/// PBKDF2 with HMAC-SHA512 as the pseudorandom function, filling `output`
/// with derived key material.
///
/// Keys longer than the SHA-512 block are hashed by the HMAC itself, so any
/// password length is accepted.
pub fn pbkdf2_hmac_sha512(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    output: &mut [u8],
) -> Result<(), Bip39Error> {
    if rounds == 0 {
        return Err(Bip39Error::InvalidIterationCount(rounds));
    }

    let prf = Hmac::<Sha512>::new_from_slice(password)?;
    let h_len = <Sha512 as Digest>::output_size();

    for (i, chunk) in output.chunks_mut(h_len).enumerate() {
        let i_be = ((i + 1) as u32).to_be_bytes();

        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&i_be);
        let mut u = mac.finalize().into_bytes();

        chunk.copy_from_slice(&u[..chunk.len()]);

        for _ in 1..rounds {
            let mut mac = prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();
            xor(chunk, &u);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests_pbkdf2 {
    use super::*;

    fn derive(password: &[u8], salt: &[u8], rounds: u32, len: usize) -> alloc::vec::Vec<u8> {
        let mut out = alloc::vec![0u8; len];
        pbkdf2_hmac_sha512(password, salt, rounds, &mut out).unwrap();
        out
    }

    #[test]
    fn test_xor() {
        let mut a1 = [0b10101010, 0b11001100];
        let b1 = [0b11110000, 0b00110011];
        let expected1 = [0b01011010, 0b11111111];
        xor(&mut a1, &b1);
        assert_eq!(a1, expected1);

        let mut a2 = [1, 2, 3, 4];
        let b2 = [0, 0, 0, 0];
        xor(&mut a2, &b2);
        assert_eq!(a2, [1, 2, 3, 4]);

        let mut a3 = [0xDE, 0xAD, 0xBE, 0xEF];
        let b3 = a3;
        xor(&mut a3, &b3);
        assert_eq!(a3, [0, 0, 0, 0]);

        let mut short = [0xFF, 0xFF];
        xor(&mut short, &[0x0F, 0xF0, 0xAA, 0xAA]);
        assert_eq!(short, [0xF0, 0x0F]);
    }

    #[test]
    fn test_single_round() {
        assert_eq!(
            hex::encode(derive(b"password", b"salt", 1, 64)),
            "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
             c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
        );
    }

    #[test]
    fn test_two_rounds() {
        assert_eq!(
            hex::encode(derive(b"password", b"salt", 2, 64)),
            "e1d9c16aa681708a45f5c7c4e215ceb66e011a2e9f0040713f18aefdb866d53c\
             f76cab2868a39b9f7840edce4fef5a82be67335c77a6068e04112754f27ccf4e"
        );
    }

    #[test]
    fn test_multi_block_output() {
        assert_eq!(
            hex::encode(derive(
                b"passwordPASSWORDpassword",
                b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
                4096,
                80
            )),
            "8c0511f4c6e597c6ac6315d8f0362e225f3c501495ba23b868c005174dc4ee71\
             115b59f9e60cd9532fa33e0f75aefe30225c583a186cd82bd4daea9724a3d3b8\
             04f75bdd41494fa324cab24bcc680fb3"
        );
    }

    #[test]
    fn test_long_password_short_output() {
        let password = [b'x'; 200];
        assert_eq!(
            hex::encode(derive(&password, b"mnemonic", 2, 20)),
            "964347c841b76ca9a4a2be9ecd887288c3ea102d"
        );
    }

    #[test]
    fn test_zero_rounds() {
        let mut out = [0u8; 64];
        assert_eq!(
            pbkdf2_hmac_sha512(b"password", b"salt", 0, &mut out),
            Err(Bip39Error::InvalidIterationCount(0))
        );
    }
}

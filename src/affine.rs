use alloc::string::String;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::alphabet::Alphabet;
use crate::modular::{gcd, modinv};

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidKey,
}

/// Affine cipher key (a, b): `y = a*x + b (mod m)` over ring indexes
///
/// Valid keys satisfy `1 <= a < m`, `0 <= b < m` and `gcd(a, m) == 1`, so the
/// transform is invertible; validation happens once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AffineKey {
    a: i64,
    b: i64,
}

impl AffineKey {
    /// Build a key for modulus `m`
    ///
    /// errors: returns InvalidKey when a or b is out of range, or when
    /// `gcd(a, m) != 1`
    pub fn new(a: i64, b: i64, m: i64) -> Result<Self, Error> {
        if a < 1 || a >= m || b < 0 || b >= m || gcd(a, m) != 1 {
            return Err(Error::InvalidKey);
        }

        Ok(Self { a, b })
    }

    /// Draw a random valid key for modulus `m` (m >= 2)
    pub fn random(rng: &mut ThreadRng, m: i64) -> Self {
        let a = loop {
            let a = rng.gen_range(1, m);
            if gcd(a, m) == 1 {
                break a;
            }
        };

        Self {
            a,
            b: rng.gen_range(0, m),
        }
    }

    pub fn a(&self) -> i64 {
        self.a
    }

    pub fn b(&self) -> i64 {
        self.b
    }
}

/// Encrypt a text under an affine key
///
/// Alphabet letters map through the ring with per-character case preservation;
/// whitespace, punctuation and digits pass through unchanged.
pub fn encrypt(plain: &str, key: &AffineKey, alphabet: &Alphabet) -> String {
    let m = alphabet.len() as i64;

    plain
        .chars()
        .map(|ch| match alphabet.position(ch) {
            Some(x) => {
                let y = (key.a * x as i64 + key.b).rem_euclid(m) as usize;
                alphabet.symbol(y, alphabet.is_uppercase(ch))
            }
            None => ch,
        })
        .collect()
}

/// Decrypt a text under an affine key
///
/// errors: returns InvalidKey when `a` has no inverse mod the alphabet size,
/// guarding independently of the construction-time check
pub fn decrypt(cipher: &str, key: &AffineKey, alphabet: &Alphabet) -> Result<String, Error> {
    let m = alphabet.len() as i64;
    let a_inv = modinv(key.a, m).map_err(|_| Error::InvalidKey)?;

    Ok(cipher
        .chars()
        .map(|ch| match alphabet.position(ch) {
            Some(y) => {
                let x = (a_inv * (y as i64 - key.b)).rem_euclid(m) as usize;
                alphabet.symbol(x, alphabet.is_uppercase(ch))
            }
            None => ch,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_key_validation() {
        assert_eq!(AffineKey::new(3, 5, 33), Err(Error::InvalidKey));
        assert_eq!(AffineKey::new(0, 5, 33), Err(Error::InvalidKey));
        assert_eq!(AffineKey::new(7, 33, 33), Err(Error::InvalidKey));
        assert!(AffineKey::new(7, 3, 33).is_ok());
    }

    #[test]
    fn check_passthrough() {
        let alphabet = Alphabet::ukrainian();
        let key = AffineKey::new(7, 3, 33).unwrap();
        assert_eq!(encrypt("12, !?", &key, &alphabet), "12, !?");
    }
}

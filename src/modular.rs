//! Modular arithmetic over the alphabet ring
//!
//! Sole source of invertibility checks for the crate: every gcd test and
//! modular inverse used by the ciphers and recovery searches goes through
//! this module.

#[derive(Debug, PartialEq)]
pub enum Error {
    NoInverse,
}

/// Extended Euclidean algorithm
///
/// Returns (g, x, y) such that `a*x + b*y = g` for any integers a, b
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        (b, 0, 1)
    } else {
        let (g, x, y) = extended_gcd(b % a, a);
        (g, y - (b / a) * x, x)
    }
}

/// Greatest common divisor (non-negative)
pub fn gcd(a: i64, b: i64) -> i64 {
    let (g, _, _) = extended_gcd(a, b);
    g.abs()
}

/// Multiplicative inverse of `a` modulo `m`
///
/// Returns x with `0 <= x < m` and `a*x == 1 (mod m)`
///
/// errors: returns NoInverse when `gcd(a, m) != 1`
pub fn modinv(a: i64, m: i64) -> Result<i64, Error> {
    let (g, x, _) = extended_gcd(a.rem_euclid(m), m);

    if g != 1 {
        return Err(Error::NoInverse);
    }

    Ok(x.rem_euclid(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_bezout_identity() {
        for &(a, b) in [(240, 46), (7, 33), (-15, 27), (0, 5)].iter() {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(a * x + b * y, g);
        }
    }

    #[test]
    fn check_inverses_mod_33() {
        for a in 1..33 {
            if gcd(a, 33) == 1 {
                let inv = modinv(a, 33).unwrap();
                assert!(inv >= 0 && inv < 33);
                assert_eq!((a * inv).rem_euclid(33), 1);
            } else {
                assert_eq!(modinv(a, 33), Err(Error::NoInverse));
            }
        }
    }

    #[test]
    fn check_no_inverse() {
        assert_eq!(modinv(3, 33), Err(Error::NoInverse));
        assert_eq!(modinv(11, 33), Err(Error::NoInverse));
    }
}

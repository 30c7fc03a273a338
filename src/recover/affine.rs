use alloc::string::String;
use alloc::vec::Vec;

use libm::fabs;

use crate::affine::{self, AffineKey};
use crate::alphabet::Alphabet;
use crate::modular::gcd;
use crate::ngram::{letter_frequency, FrequencyTable};

/// A brute-force trial whose distance tied the minimum observed
#[derive(Clone, Debug)]
pub struct Candidate {
    pub key: AffineKey,
    pub plaintext: String,
    pub delta: f64,
}

/// Multipliers in `[1, m)` coprime with `m` (the valid affine `a` values)
pub fn coprime_multipliers(m: i64) -> Vec<i64> {
    (1..m).filter(|&a| gcd(a, m) == 1).collect()
}

/// L1 distance between two unigram tables, summed over every alphabet symbol
///
/// Symbols absent from either table contribute a frequency of 0, so an empty
/// reference degrades to comparing against the zero profile.
pub fn unigram_distance(left: &FrequencyTable, right: &FrequencyTable, alphabet: &Alphabet) -> f64 {
    let mut delta = 0.0;
    let mut gram = String::with_capacity(4);

    for &ch in alphabet.symbols() {
        gram.clear();
        gram.push(ch);

        let lf = left.get(gram.as_str()).copied().unwrap_or(0.0);
        let rf = right.get(gram.as_str()).copied().unwrap_or(0.0);
        delta += fabs(lf - rf);
    }

    delta
}

/// Exhaustive affine key search ranked by unigram-frequency distance
///
/// Enumerates every coprime multiplier crossed with every shift (660 trials
/// for a 33-symbol alphabet), decrypts each, and keeps every trial that
/// exactly ties the minimum distance to the reference profile. Ties are not
/// broken; all minimal candidates come back, in enumeration order (a, then b),
/// which is ascending-by-delta since they share the minimum.
pub fn crack(cipher: &str, alphabet: &Alphabet, reference: &FrequencyTable) -> Vec<Candidate> {
    let m = alphabet.len() as i64;
    let mut best = f64::INFINITY;
    let mut candidates: Vec<Candidate> = Vec::new();

    for a in coprime_multipliers(m) {
        for b in 0..m {
            let key = match AffineKey::new(a, b, m) {
                Ok(key) => key,
                Err(_) => continue,
            };

            // a bad trial is dropped, never fatal to the search
            let plaintext = match affine::decrypt(cipher, &key, alphabet) {
                Ok(plaintext) => plaintext,
                Err(_) => continue,
            };

            let observed = letter_frequency(&plaintext, alphabet);
            let delta = unigram_distance(&observed, reference, alphabet);

            if delta < best {
                best = delta;
                candidates.clear();
                candidates.push(Candidate {
                    key,
                    plaintext,
                    delta,
                });
            } else if delta == best {
                candidates.push(Candidate {
                    key,
                    plaintext,
                    delta,
                });
            }
        }
    }

    candidates
}

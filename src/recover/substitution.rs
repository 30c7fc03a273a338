use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::affine::{self, AffineKey};
use crate::alphabet::Alphabet;
use crate::modular::{gcd, modinv};
use crate::ngram::{count_ngrams, most_frequent, FrequencyTable};
use crate::score::score;

/// Number of top-ranked letters fed into hypothesis generation
pub const TOP_LETTERS: usize = 5;

/// Most frequent letters of Ukrainian text, most frequent first
pub const UKRAINIAN_TOP: [char; TOP_LETTERS] = ['о', 'а', 'і', 'е', 'н'];

/// An affine hypothesis for the unknown substitution, with its plausibility
#[derive(Clone, Debug)]
pub struct Hypothesis {
    pub key: AffineKey,
    pub plaintext: String,
    pub score: f64,
}

/// Most frequent ciphertext letters, ranked for hypothesis generation
pub fn frequent_letters(cipher: &str, alphabet: &Alphabet, k: usize) -> Vec<char> {
    let counts = count_ngrams(cipher, 1, alphabet);

    most_frequent(&counts, k)
        .iter()
        .filter_map(|gram| gram.chars().next())
        .collect()
}

/// Pair the i-th most frequent ciphertext letter with the i-th reference letter
///
/// A partial seed for manual inspection via `substitution::apply_partial`, not
/// a full key.
pub fn rank_mapping(cipher_top: &[char], reference_top: &[char]) -> HashMap<char, char> {
    cipher_top
        .iter()
        .copied()
        .zip(reference_top.iter().copied())
        .collect()
}

/// Generate candidate affine keys from frequent-letter pairings
///
/// For every ordered pair of distinct ciphertext letters (y1, y2) and every
/// ordered pair of distinct reference letters (x1, x2), solves
/// `a*x1 + b == y1`, `a*x2 + b == y2 (mod m)` and keeps each valid (a, b)
/// once. Pairs whose delta-x or resulting `a` is not coprime with m are
/// skipped, as are letters outside the alphabet.
pub fn affine_hypotheses(
    cipher_top: &[char],
    reference_top: &[char],
    alphabet: &Alphabet,
) -> Vec<AffineKey> {
    let m = alphabet.len() as i64;
    let mut seen: HashSet<(i64, i64)> = HashSet::new();
    let mut keys = Vec::new();

    for (i, &y1_ch) in cipher_top.iter().enumerate() {
        for (j, &y2_ch) in cipher_top.iter().enumerate() {
            if i == j {
                continue;
            }

            let (y1, y2) = match (alphabet.position(y1_ch), alphabet.position(y2_ch)) {
                (Some(y1), Some(y2)) => (y1 as i64, y2 as i64),
                _ => continue,
            };

            for (p, &x1_ch) in reference_top.iter().enumerate() {
                for (q, &x2_ch) in reference_top.iter().enumerate() {
                    if p == q {
                        continue;
                    }

                    let (x1, x2) = match (alphabet.position(x1_ch), alphabet.position(x2_ch)) {
                        (Some(x1), Some(x2)) => (x1 as i64, x2 as i64),
                        _ => continue,
                    };

                    let dx = (x1 - x2).rem_euclid(m);
                    let dy = (y1 - y2).rem_euclid(m);

                    let dx_inv = match modinv(dx, m) {
                        Ok(inv) => inv,
                        Err(_) => continue,
                    };

                    let a = (dy * dx_inv).rem_euclid(m);
                    if gcd(a, m) != 1 {
                        continue;
                    }

                    let b = (y1 - a * x1).rem_euclid(m);
                    if seen.insert((a, b)) {
                        if let Ok(key) = AffineKey::new(a, b, m) {
                            keys.push(key);
                        }
                    }
                }
            }
        }
    }

    keys
}

/// Recover a substitution cipher under the affine-approximation heuristic
///
/// The full m! permutation space is never searched. Ciphertext letters are
/// ranked by frequency, paired against the reference ranking to generate
/// affine hypotheses, and each hypothesis is decrypted and scored against the
/// known-word list and reference n-gram tables. Only hypotheses with a
/// positive score come back, best first; an empty result means nothing scored
/// above zero, which is a valid outcome.
///
/// Limitation: a substitution that is not expressible as an affine map will
/// not be recovered by this search.
pub fn crack(
    cipher: &str,
    alphabet: &Alphabet,
    reference_top: &[char],
    known_words: &HashSet<String>,
    bigrams: &FrequencyTable,
    trigrams: &FrequencyTable,
) -> Vec<Hypothesis> {
    let cipher_top = frequent_letters(cipher, alphabet, TOP_LETTERS);

    let mut hypotheses = Vec::new();

    for key in affine_hypotheses(&cipher_top, reference_top, alphabet) {
        let plaintext = match affine::decrypt(cipher, &key, alphabet) {
            Ok(plaintext) => plaintext,
            Err(_) => continue,
        };

        let plausibility = score(&plaintext, known_words, bigrams, trigrams, alphabet);
        if plausibility > 0.0 {
            hypotheses.push(Hypothesis {
                key,
                plaintext,
                score: plausibility,
            });
        }
    }

    hypotheses.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    hypotheses
}

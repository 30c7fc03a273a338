use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use crate::alphabet::Alphabet;

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidKey,
}

/// Monoalphabetic substitution key: a bijection over the alphabet
///
/// The forward map is validated as total and injective at construction, and
/// the inverse is derived once by inversion; both are case-doubled so the
/// transforms stay case-sensitive.
#[derive(Clone, Debug)]
pub struct SubstitutionKey {
    forward: HashMap<char, char>,
    inverse: HashMap<char, char>,
}

impl SubstitutionKey {
    /// Build a key from a lowercase letter mapping
    ///
    /// errors: returns InvalidKey when the mapping is not a total injective
    /// map of the alphabet onto itself
    pub fn new(mapping: &HashMap<char, char>, alphabet: &Alphabet) -> Result<Self, Error> {
        if mapping.len() != alphabet.len() {
            return Err(Error::InvalidKey);
        }

        let mut forward = HashMap::with_capacity(alphabet.len() * 2);
        let mut inverse = HashMap::with_capacity(alphabet.len() * 2);

        for (i, &src) in alphabet.symbols().iter().enumerate() {
            let dst_idx = mapping
                .get(&src)
                .and_then(|&dst| alphabet.position(dst))
                .ok_or(Error::InvalidKey)?;

            // two sources mapping to one target break invertibility
            if inverse.insert(alphabet.symbol(dst_idx, false), src).is_some() {
                return Err(Error::InvalidKey);
            }
            inverse.insert(alphabet.symbol(dst_idx, true), alphabet.symbol(i, true));

            forward.insert(src, alphabet.symbol(dst_idx, false));
            forward.insert(alphabet.symbol(i, true), alphabet.symbol(dst_idx, true));
        }

        Ok(Self { forward, inverse })
    }

    /// Draw a uniformly random substitution key
    pub fn random(rng: &mut ThreadRng, alphabet: &Alphabet) -> Self {
        let mut shuffled: Vec<char> = alphabet.symbols().to_vec();
        shuffled.shuffle(rng);

        let mapping: HashMap<char, char> = alphabet
            .symbols()
            .iter()
            .copied()
            .zip(shuffled.into_iter())
            .collect();

        match Self::new(&mapping, alphabet) {
            Ok(key) => key,
            // a shuffle of the alphabet is always a bijection
            Err(_) => unreachable!(),
        }
    }
}

/// Encrypt a text through the forward mapping; unmapped characters pass through
pub fn encrypt(text: &str, key: &SubstitutionKey) -> String {
    text.chars()
        .map(|ch| key.forward.get(&ch).copied().unwrap_or(ch))
        .collect()
}

/// Decrypt a text through the inverse mapping; unmapped characters pass through
pub fn decrypt(text: &str, key: &SubstitutionKey) -> String {
    text.chars()
        .map(|ch| key.inverse.get(&ch).copied().unwrap_or(ch))
        .collect()
}

/// Apply a partial letter mapping, leaving unmapped characters unchanged
///
/// Used to preview a frequency-rank seed before committing to a full key.
pub fn apply_partial(text: &str, mapping: &HashMap<char, char>) -> String {
    text.chars()
        .map(|ch| mapping.get(&ch).copied().unwrap_or(ch))
        .collect()
}

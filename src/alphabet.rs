use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

#[derive(Debug, PartialEq)]
pub enum Error {
    DuplicateSymbol(char),
    BadCaseMapping(char),
}

/// The 33 lowercase letters of the Ukrainian alphabet, in ring order
pub const UKRAINIAN_LOWER: [char; 33] = [
    'а', 'б', 'в', 'г', 'ґ', 'д', 'е', 'є', 'ж', 'з', 'и', 'і', 'ї', 'й', 'к', 'л', 'м', 'н', 'о',
    'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ь', 'ю', 'я',
];

/// Ordered sequence of distinct lowercase symbols defining the index ring `0..len`
///
/// Uppercase forms are derived once from the Unicode case mapping; every cipher
/// and recovery operation takes an `Alphabet` by reference, so multiple
/// alphabets can coexist in one process.
#[derive(Clone, Debug)]
pub struct Alphabet {
    lower: Vec<char>,
    upper: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from an ordered slice of lowercase symbols
    ///
    /// errors: returns DuplicateSymbol on a repeated symbol, BadCaseMapping on
    /// a symbol without a single-character uppercase round-trip
    pub fn new(symbols: &[char]) -> Result<Self, Error> {
        let mut lower = Vec::with_capacity(symbols.len());
        let mut upper = Vec::with_capacity(symbols.len());
        let mut index = HashMap::with_capacity(symbols.len());

        for (i, &ch) in symbols.iter().enumerate() {
            let mut ups = ch.to_uppercase();
            let up = match (ups.next(), ups.next()) {
                (Some(u), None) => u,
                _ => return Err(Error::BadCaseMapping(ch)),
            };

            let mut lows = up.to_lowercase();
            if (lows.next(), lows.next()) != (Some(ch), None) {
                return Err(Error::BadCaseMapping(ch));
            }

            if index.insert(ch, i).is_some() {
                return Err(Error::DuplicateSymbol(ch));
            }

            lower.push(ch);
            upper.push(up);
        }

        Ok(Self {
            lower,
            upper,
            index,
        })
    }

    /// The 33-letter Ukrainian alphabet
    pub fn ukrainian() -> Self {
        match Self::new(&UKRAINIAN_LOWER) {
            Ok(alphabet) => alphabet,
            // the constant is a fixed list of distinct single-case letters
            Err(_) => unreachable!(),
        }
    }

    /// Number of symbols (the modulus of the index ring)
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Lowercase symbols in ring order
    pub fn symbols(&self) -> &[char] {
        &self.lower
    }

    /// Ring index of a symbol, folding case
    pub fn position(&self, ch: char) -> Option<usize> {
        if let Some(&i) = self.index.get(&ch) {
            return Some(i);
        }

        let mut lows = ch.to_lowercase();
        match (lows.next(), lows.next()) {
            (Some(low), None) => self.index.get(&low).copied(),
            _ => None,
        }
    }

    /// Whether the symbol belongs to the alphabet in either case
    pub fn contains(&self, ch: char) -> bool {
        self.position(ch).is_some()
    }

    /// Symbol at a ring index, in the requested case
    ///
    /// Index must come from the ring (i.e. already reduced mod `len`)
    pub fn symbol(&self, idx: usize, uppercase: bool) -> char {
        if uppercase {
            self.upper[idx]
        } else {
            self.lower[idx]
        }
    }

    /// Whether the character is the uppercase form of an alphabet symbol
    pub fn is_uppercase(&self, ch: char) -> bool {
        self.contains(ch) && self.index.get(&ch).is_none()
    }

    /// Strip a text down to alphabet letters (either case), spaces and newlines
    pub fn clean(&self, text: &str) -> String {
        text.chars()
            .filter(|&ch| ch == ' ' || ch == '\n' || self.contains(ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn check_ukrainian_ring() {
        let alphabet = Alphabet::ukrainian();
        assert_eq!(alphabet.len(), 33);
        assert_eq!(alphabet.position('а'), Some(0));
        assert_eq!(alphabet.position('Я'), Some(32));
        assert_eq!(alphabet.symbol(4, false), 'ґ');
        assert_eq!(alphabet.symbol(4, true), 'Ґ');
        assert!(!alphabet.contains('q'));
    }

    #[test]
    fn check_duplicate_rejected() {
        match Alphabet::new(&['а', 'б', 'а']) {
            Err(Error::DuplicateSymbol('а')) => (),
            other => panic!("duplicate symbol accepted: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn check_clean_keeps_letters_and_whitespace() {
        let alphabet = Alphabet::ukrainian();
        let cleaned = alphabet.clean("Привіт, світ!\n123 ok");
        assert_eq!(cleaned, "Привіт світ\n ".to_string());
    }
}

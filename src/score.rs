use alloc::string::String;

use hashbrown::HashSet;

use crate::alphabet::Alphabet;
use crate::ngram::{count_ngrams, FrequencyTable};

/// Linguistic plausibility score of a candidate plaintext
///
/// Additive evidence: +1 per known word present as a substring of the
/// lowercased text (at most once per word), plus the reference weight of every
/// observed bigram and trigram occurrence found in the reference tables.
/// Higher is better; more matched evidence never lowers the score. Empty
/// reference tables simply contribute nothing.
pub fn score(
    text: &str,
    known_words: &HashSet<String>,
    bigrams: &FrequencyTable,
    trigrams: &FrequencyTable,
    alphabet: &Alphabet,
) -> f64 {
    let lowered: String = text.chars().flat_map(char::to_lowercase).collect();

    let mut total = 0.0;

    for word in known_words {
        if lowered.contains(word.as_str()) {
            total += 1.0;
        }
    }

    for (gram, count) in count_ngrams(&lowered, 2, alphabet) {
        if let Some(weight) = bigrams.get(&gram) {
            total += weight * count as f64;
        }
    }

    for (gram, count) in count_ngrams(&lowered, 3, alphabet) {
        if let Some(weight) = trigrams.get(&gram) {
            total += weight * count as f64;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn check_word_counts_once() {
        let alphabet = Alphabet::ukrainian();
        let mut words = HashSet::new();
        words.insert("як".to_string());

        let empty = FrequencyTable::new();
        let once = score("як", &words, &empty, &empty, &alphabet);
        let twice = score("як як", &words, &empty, &empty, &alphabet);

        assert_eq!(once, 1.0);
        // presence test, not an occurrence count; the repeat only adds
        // whatever n-gram mass the longer stream earns (none here)
        assert_eq!(twice, 1.0);
    }

    #[test]
    fn check_monotonic_in_evidence() {
        let alphabet = Alphabet::ukrainian();
        let mut words = HashSet::new();
        words.insert("привіт".to_string());

        let mut bigrams = FrequencyTable::new();
        bigrams.insert("пр".to_string(), 0.05);

        let empty = FrequencyTable::new();
        let base = score("привіт", &words, &bigrams, &empty, &alphabet);
        let more = score("привіт привіт", &words, &bigrams, &empty, &alphabet);

        assert!(more >= base);
    }
}

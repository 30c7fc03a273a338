use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::alphabet::Alphabet;

/// Raw n-gram multiset counts
pub type Counts = HashMap<String, u64>;

/// Relative frequencies per symbol or n-gram, values in [0, 1]
pub type FrequencyTable = HashMap<String, f64>;

/// Count all length-n contiguous windows of the letters-only stream of a text
///
/// The text is case-folded and every non-alphabet character (spaces included)
/// is dropped before windowing, so windows cross word boundaries.
pub fn count_ngrams(text: &str, n: usize, alphabet: &Alphabet) -> Counts {
    let mut counts = Counts::new();
    if n == 0 {
        return counts;
    }

    let letters: Vec<char> = text
        .chars()
        .filter_map(|ch| alphabet.position(ch).map(|i| alphabet.symbol(i, false)))
        .collect();

    if letters.len() < n {
        return counts;
    }

    for window in letters.windows(n) {
        let gram: String = window.iter().collect();
        *counts.entry(gram).or_insert(0) += 1;
    }

    counts
}

/// Convert counts to relative frequencies
///
/// An empty multiset yields an empty table rather than dividing by zero.
pub fn relative_frequency(counts: &Counts) -> FrequencyTable {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return FrequencyTable::new();
    }

    let total = total as f64;
    counts
        .iter()
        .map(|(gram, &count)| (gram.clone(), count as f64 / total))
        .collect()
}

/// Unigram relative frequencies of a text
pub fn letter_frequency(text: &str, alphabet: &Alphabet) -> FrequencyTable {
    relative_frequency(&count_ngrams(text, 1, alphabet))
}

/// Top-k n-grams by count, descending, ties broken lexicographically
pub fn most_frequent(counts: &Counts, k: usize) -> Vec<String> {
    let mut items: Vec<(&String, u64)> = counts.iter().map(|(gram, &count)| (gram, count)).collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    items.into_iter().take(k).map(|(gram, _)| gram.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn check_windows_cross_spaces() {
        let alphabet = Alphabet::ukrainian();
        // letters-only stream is "такта": windows are та ак кт та
        let counts = count_ngrams("Так та!", 2, &alphabet);

        assert_eq!(counts.get("та"), Some(&2));
        assert_eq!(counts.get("ак"), Some(&1));
        assert_eq!(counts.get("кт"), Some(&1));
        assert_eq!(counts.values().sum::<u64>(), 4);
    }

    #[test]
    fn check_empty_stream() {
        let alphabet = Alphabet::ukrainian();
        let counts = count_ngrams("123 ...", 3, &alphabet);

        assert!(counts.is_empty());
        assert!(relative_frequency(&counts).is_empty());
    }

    #[test]
    fn check_most_frequent_ties() {
        let alphabet = Alphabet::ukrainian();
        let counts = count_ngrams("ба аб", 1, &alphabet);

        // а and б both occur twice; lexicographic order decides
        assert_eq!(most_frequent(&counts, 2), vec!["а", "б"]);
    }
}

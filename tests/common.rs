use hashbrown::HashSet;

use monoalpha::alphabet::Alphabet;
use monoalpha::ngram::{count_ngrams, relative_frequency, FrequencyTable};

// Ukrainian sample long enough to carry a usable frequency profile
#[allow(dead_code)]
pub const SAMPLE: &str = "у лісі край села жила стара лисиця вона щодня ходила до річки та слухала \
тиху воду осінь несла холодні дощі але сонце ще гріло стежки люди казали \
що той ліс береже давню таємницю і ніхто не знав де саме вона схована \
малі діти бігали полем збирали колоски та співали пісні про рідну землю \
вечорами над хатами здіймався дим і пахло свіжим хлібом";

#[allow(dead_code)]
pub fn reference_ngrams(text: &str, n: usize, alphabet: &Alphabet) -> FrequencyTable {
    relative_frequency(&count_ngrams(text, n, alphabet))
}

#[allow(dead_code)]
pub fn known_words() -> HashSet<String> {
    ["лисиця", "річки", "колоски", "хлібом"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

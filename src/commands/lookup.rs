//! Dictionary lookup and listing commands

use crate::dictionary::Dictionary;
use crate::solver::{RuleSet, Search, SearchConfig};

/// Whether a word is in the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub word: String,
    pub found: bool,
}

/// Look up each word, case-insensitively
#[must_use]
pub fn lookup_words<S: AsRef<str>>(words: &[S], dictionary: &Dictionary) -> Vec<LookupResult> {
    words
        .iter()
        .map(|word| {
            let word = word.as_ref().to_ascii_lowercase();
            let found = dictionary.contains(&word);
            LookupResult { word, found }
        })
        .collect()
}

/// Every word of the configured length
#[must_use]
pub fn list_words(dictionary: &Dictionary, config: SearchConfig) -> Vec<String> {
    Search::with_config(dictionary, &RuleSet::default(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;
    use crate::dictionary::global;
    use crate::wordlists::WORDS;

    #[test]
    fn lookup_reports_membership() {
        let dict = global::init_embedded().unwrap();
        let results = lookup_words(&["Voice", "vioce", "voic"], dict);
        assert_eq!(
            results,
            [
                LookupResult {
                    word: "voice".to_string(),
                    found: true
                },
                LookupResult {
                    word: "vioce".to_string(),
                    found: false
                },
                LookupResult {
                    word: "voic".to_string(),
                    found: false
                },
            ]
        );
    }

    #[test]
    fn every_bundled_word_is_found() {
        let dict = global::init_embedded().unwrap();
        assert!(lookup_words(WORDS, dict).iter().all(|r| r.found));
    }

    #[test]
    fn list_words_honors_length() {
        let dict = Dictionary::from_words(["ox", "oxen", "box", "boxes"]).unwrap();
        let config = |word_length| SearchConfig {
            word_length,
            ..SearchConfig::default()
        };
        assert_eq!(list_words(&dict, config(3)), ["box"]);
        assert_eq!(list_words(&dict, config(2)), ["ox"]);
        assert!(list_words(&dict, config(WORD_LENGTH)).contains(&"boxes".to_string()));
    }
}

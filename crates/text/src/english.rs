//! English analysis: sentence split, word split, POS class, lemma

use tracing::trace;
use unicode_categories::UnicodeCategories;
use unicode_segmentation::UnicodeSegmentation;

use crate::language::Language;
use crate::lemma::lemmatize;
use crate::stopwords::StopwordSet;
use crate::tokenizer::LanguageTokenizer;
use crate::types::{AnalyzedWord, PosClass, TokenSequence};

/// Clitics split off the end of a word (`don't` -> `do` + `n't`)
const CLITICS: &[&str] = &["n't", "'s", "'re", "'m", "'ll", "'ve", "'d"];

/// Analyze text into sentences of (surface, lemma, POS) words
pub fn analyze(text: &str) -> Vec<Vec<AnalyzedWord>> {
    text.unicode_sentences()
        .map(analyze_sentence)
        .filter(|words| !words.is_empty())
        .collect()
}

fn analyze_sentence(sentence: &str) -> Vec<AnalyzedWord> {
    sentence
        .split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .flat_map(split_clitics)
        .map(|word| {
            let pos = classify(&word);
            let lemma = match pos {
                PosClass::Word => lemmatize(&word),
                _ => word.clone(),
            };
            AnalyzedWord {
                text: word,
                lemma,
                pos,
            }
        })
        .collect()
}

/// Lowercase a word segment and split trailing clitics
fn split_clitics(segment: &str) -> Vec<String> {
    let word = segment.replace('\u{2019}', "'").to_lowercase();

    for clitic in CLITICS {
        if let Some(host) = word.strip_suffix(clitic) {
            if !host.is_empty() && host.chars().any(char::is_alphabetic) {
                return vec![host.to_string(), (*clitic).to_string()];
            }
        }
    }

    vec![word]
}

fn classify(word: &str) -> PosClass {
    if word.chars().all(|c| c.is_punctuation()) {
        PosClass::Punct
    } else if word.chars().any(char::is_alphabetic) || word.starts_with('\'') {
        PosClass::Word
    } else if word.chars().any(|c| c.is_numeric()) {
        PosClass::Num
    } else {
        PosClass::Symbol
    }
}

/// English tokenizer: lemmas of non-punctuation words not in the stopword set
pub struct EnglishTokenizer {
    stopwords: StopwordSet,
}

impl EnglishTokenizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }
}

impl LanguageTokenizer for EnglishTokenizer {
    fn language(&self) -> Language {
        Language::English
    }

    fn tokenize(&self, text: &str) -> TokenSequence {
        analyze(text)
            .into_iter()
            .flatten()
            .filter(|word| {
                let keep = word.pos != PosClass::Punct && !self.stopwords.contains(&word.lemma);
                if !keep {
                    trace!("Dropping token: {:?}", word);
                }
                keep
            })
            .map(|word| word.lemma)
            .collect()
    }
}

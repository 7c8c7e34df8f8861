//! Chinese word segmentation

use jieba_rs::Jieba;
use tracing::info;

use crate::language::Language;
use crate::stopwords::StopwordSet;
use crate::tokenizer::LanguageTokenizer;
use crate::types::TokenSequence;

/// Chinese tokenizer: jieba segments, trimmed, minus blanks and stopwords.
///
/// Segmentation only; no POS pass is run over Chinese text.
pub struct ChineseTokenizer {
    jieba: Jieba,
    stopwords: StopwordSet,
}

impl ChineseTokenizer {
    /// Create tokenizer; loads the bundled jieba dictionary
    pub fn new(stopwords: StopwordSet) -> Self {
        let jieba = Jieba::new();
        info!("Jieba dictionary loaded");
        Self { jieba, stopwords }
    }

    /// Raw segments before filtering
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, true)
    }
}

impl LanguageTokenizer for ChineseTokenizer {
    fn language(&self) -> Language {
        Language::Chinese
    }

    fn tokenize(&self, text: &str) -> TokenSequence {
        self.segment(text)
            .into_iter()
            .map(str::trim)
            .filter(|word| !word.is_empty() && !self.stopwords.contains(word))
            .map(str::to_string)
            .collect()
    }
}

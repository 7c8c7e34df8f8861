use lingvec_common::{LingvecError, Result};
use tracing::debug;

use crate::chinese::ChineseTokenizer;
use crate::english::EnglishTokenizer;
use crate::language::Language;
use crate::stopwords::Stopwords;
use crate::types::TokenSequence;

/// Language-specific normalization
pub trait LanguageTokenizer: Send + Sync {
    /// Language handled by this tokenizer
    fn language(&self) -> Language;

    /// Produce normalized tokens; `text` is already known to be non-blank
    fn tokenize(&self, text: &str) -> TokenSequence;
}

/// Tokenizer dispatching on [`Language`]
pub struct Tokenizer {
    english: Box<dyn LanguageTokenizer>,
    chinese: Box<dyn LanguageTokenizer>,
}

impl Tokenizer {
    /// Build the default English and Chinese tokenizers
    pub fn new(stopwords: Stopwords) -> Self {
        let Stopwords { english, chinese } = stopwords;
        Self::from_parts(
            Box::new(EnglishTokenizer::new(english)),
            Box::new(ChineseTokenizer::new(chinese)),
        )
    }

    /// Build from custom per-language tokenizers
    pub fn from_parts(
        english: Box<dyn LanguageTokenizer>,
        chinese: Box<dyn LanguageTokenizer>,
    ) -> Self {
        Self { english, chinese }
    }

    pub fn for_language(&self, lang: Language) -> &dyn LanguageTokenizer {
        match lang {
            Language::English => self.english.as_ref(),
            Language::Chinese => self.chinese.as_ref(),
        }
    }

    /// Tokenize text for a language
    pub fn tokenize(&self, text: &str, lang: Language) -> Result<TokenSequence> {
        if text.trim().is_empty() {
            return Err(LingvecError::EmptyInput);
        }

        let tokens = self.for_language(lang).tokenize(text);
        debug!(
            "Tokenized {} chars ({}) into {} tokens",
            text.chars().count(),
            lang,
            tokens.len()
        );

        Ok(tokens)
    }

    /// Tokenize text for a raw language tag such as `"en"`
    pub fn tokenize_tagged(&self, text: &str, tag: &str) -> Result<TokenSequence> {
        let lang: Language = tag.parse()?;
        self.tokenize(text, lang)
    }
}

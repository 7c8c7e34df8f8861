use serde::Serialize;

/// Coarse part-of-speech class assigned by the English analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PosClass {
    /// Punctuation marks
    Punct,
    /// Currency, math and other symbols
    Symbol,
    /// Numerals
    Num,
    /// Everything with letters in it
    Word,
}

/// One analyzed word: lowercased surface form, lemma and POS class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedWord {
    pub text: String,
    pub lemma: String,
    pub pos: PosClass,
}

/// Normalized tokens produced for a single request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Tokens joined by single spaces; this is the encoder's input
    pub fn to_text(&self) -> String {
        self.tokens.join(" ")
    }
}

impl FromIterator<String> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

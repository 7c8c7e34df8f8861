//! Lingvec text normalization
//!
//! 언어별 토큰화: English lemmas, Chinese segments, stopword filtering

mod chinese;
mod english;
mod language;
mod lemma;
mod stopwords;
mod tokenizer;
mod types;

pub use chinese::ChineseTokenizer;
pub use english::{analyze, EnglishTokenizer};
pub use language::Language;
pub use lemma::lemmatize;
pub use stopwords::{StopwordSet, Stopwords};
pub use tokenizer::{LanguageTokenizer, Tokenizer};
pub use types::{AnalyzedWord, PosClass, TokenSequence};

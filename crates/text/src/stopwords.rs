//! Stopword lists
//!
//! Loaded once at startup and shared read-only afterwards.

use lingvec_common::{LingvecError, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// NLTK English stopword corpus
const ENGLISH_STOPWORDS: &str = include_str!("../../../resources/stopwords-en.txt");

/// A set of low-information words for one language
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from an iterator of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a word list: one word per line, surrounding whitespace
    /// trimmed, blank lines skipped
    pub fn parse(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    /// Load a UTF-8 word list from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LingvecError::config(format!(
                "Failed to read stopword list {}: {}",
                path.display(),
                e
            ))
        })?;

        let set = Self::parse(&content);
        info!("Loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    /// Bundled English list
    pub fn english_default() -> Self {
        Self::parse(ENGLISH_STOPWORDS)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Stopword sets for every supported language
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    pub english: StopwordSet,
    pub chinese: StopwordSet,
}

impl Stopwords {
    pub fn new(english: StopwordSet, chinese: StopwordSet) -> Self {
        Self { english, chinese }
    }

    /// Load both lists. The English list falls back to the bundled
    /// corpus when no path is given; the Chinese list is required.
    pub fn load(english_path: Option<&Path>, chinese_path: &Path) -> Result<Self> {
        let english = match english_path {
            Some(path) => StopwordSet::load(path)?,
            None => StopwordSet::english_default(),
        };
        let chinese = StopwordSet::load(chinese_path)?;

        Ok(Self { english, chinese })
    }
}

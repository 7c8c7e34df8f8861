use lingvec_common::LingvecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported input languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// Every supported language
    pub const ALL: [Language; 2] = [Language::English, Language::Chinese];

    /// Language tag used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LingvecError;

    /// Parse a language tag (`en` or `zh`, case-insensitive)
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "zh" => Ok(Language::Chinese),
            _ => Err(LingvecError::unsupported_language(tag)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_tags() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("ZH".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!(" zh ".parse::<Language>().unwrap(), Language::Chinese);
    }

    #[test]
    fn test_parse_unsupported_tag() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert!(matches!(err, LingvecError::UnsupportedLanguage(ref tag) if tag == "fr"));

        assert!("".parse::<Language>().is_err());
        assert!("english".parse::<Language>().is_err());
    }

    #[test]
    fn test_code_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }
}

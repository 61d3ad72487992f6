//! Supported languages.
//!
//! Languages are identified by their ISO 639-1 code, which is also
//! the suffix used by Wikipedia dump configurations (`20231101.en`).
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Pt,
    Fr,
    It,
    Es,
    De,
    Ru,
    Be,
    Ko,
}

impl Lang {
    /// Every supported language, in declaration order.
    pub const ALL: [Lang; 9] = [
        Lang::En,
        Lang::Pt,
        Lang::Fr,
        Lang::It,
        Lang::Es,
        Lang::De,
        Lang::Ru,
        Lang::Be,
        Lang::Ko,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt",
            Lang::Fr => "fr",
            Lang::It => "it",
            Lang::Es => "es",
            Lang::De => "de",
            Lang::Ru => "ru",
            Lang::Be => "be",
            Lang::Ko => "ko",
        }
    }

    /// Model name prefix understood by UDPipe services.
    pub fn udpipe_model(&self) -> &'static str {
        match self {
            Lang::En => "english",
            Lang::Pt => "portuguese",
            Lang::Fr => "french",
            Lang::It => "italian",
            Lang::Es => "spanish",
            Lang::De => "german",
            Lang::Ru => "russian",
            Lang::Be => "belarusian",
            Lang::Ko => "korean",
        }
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Lang::ALL
            .iter()
            .find(|lang| lang.code() == code)
            .copied()
            .ok_or_else(|| Error::UnknownLang(s.to_string()))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_str(lang.code()).unwrap(), lang);
        }
        assert_eq!(Lang::from_str(" KO ").unwrap(), Lang::Ko);
    }

    #[test]
    fn unknown_code() {
        match Lang::from_str("xx") {
            Err(Error::UnknownLang(code)) => assert_eq!(code, "xx"),
            other => panic!("expected UnknownLang, got {:?}", other),
        }
    }

    #[test]
    fn display_is_code() {
        assert_eq!(Lang::Be.to_string(), "be");
    }
}

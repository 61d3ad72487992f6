//! Regex based cleaner.
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::Error;
use crate::lang::Lang;

use super::strategy::{strategy_for, CleaningStrategy};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("invalid whitespace regex");
}

/// Compiled cleaning strategy for a given language.
#[derive(Debug, Clone)]
pub struct Cleaner {
    lang: Lang,
    strategy: &'static CleaningStrategy,
    /// matches anything that is *not* allow-listed
    disallowed: Regex,
    /// matches a single allow-listed character
    allowed: Regex,
}

impl Cleaner {
    pub fn new(lang: Lang) -> Result<Self, Error> {
        let strategy = strategy_for(lang);
        let class = strategy.class();
        debug!("[{}] using {} strategy: [{}]", lang, strategy.name(), class);

        Ok(Self {
            lang,
            strategy,
            disallowed: Regex::new(&format!("[^{}]", class))?,
            allowed: Regex::new(&format!("^[{}]$", class))?,
        })
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn strategy(&self) -> &'static CleaningStrategy {
        self.strategy
    }

    /// Clean `text`.
    ///
    /// Newlines are removed first, then non allow-listed characters
    /// and whitespace is finally collapsed/trimmed.
    /// Returns an empty string if nothing survives.
    pub fn clean(&self, text: &str) -> String {
        let text = text.replace('\n', " ");
        let text = self.disallowed.replace_all(&text, "");
        WHITESPACE.replace_all(&text, " ").trim().to_string()
    }

    /// returns `true` if `c` is part of the allow-list.
    pub fn is_allowed(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.allowed.is_match(c.encode_utf8(&mut buf))
    }
}

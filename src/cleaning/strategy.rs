//! Language to cleaning strategy mapping.
use crate::lang::Lang;

/// Punctuation kept for every language, escaped for use inside a regex character class.
pub const PUNCT: &str = r#"\.,;:!\?\-\(\)"'«»“”‘’…¿¡/%"#;

/// A named alphabet.
///
/// `letters` is the body of a regex character class (ranges and literals),
/// digits, whitespace and [PUNCT] are added by [CleaningStrategy::class].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningStrategy {
    name: &'static str,
    letters: &'static str,
}

impl CleaningStrategy {
    const fn new(name: &'static str, letters: &'static str) -> Self {
        Self { name, letters }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn letters(&self) -> &'static str {
        self.letters
    }

    /// Body of the allow-list character class.
    pub fn class(&self) -> String {
        format!(r"{}0-9\s{}", self.letters, PUNCT)
    }
}

static ENGLISH: CleaningStrategy = CleaningStrategy::new("english", "A-Za-z");
static PORTUGUESE: CleaningStrategy =
    CleaningStrategy::new("portuguese", "A-Za-zÁÀÂÃÉÊÍÓÔÕÚÇáàâãéêíóôõúç");
static FRENCH: CleaningStrategy =
    CleaningStrategy::new("french", "A-Za-zÀÂÆÇÉÈÊËÎÏÔŒÙÛÜàâæçéèêëîïôœùûüÿ");
static ITALIAN: CleaningStrategy = CleaningStrategy::new("italian", "A-Za-zÀÈÉÌÒÙàèéìòù");
static SPANISH: CleaningStrategy = CleaningStrategy::new("spanish", "A-Za-zÁÉÍÓÚÜÑáéíóúüñ");
static GERMAN: CleaningStrategy = CleaningStrategy::new("german", "A-Za-zÄÖÜäöüß");
static RUSSIAN: CleaningStrategy = CleaningStrategy::new("russian", "А-Яа-яЁё");
static BELARUSIAN: CleaningStrategy = CleaningStrategy::new("belarusian", "А-Яа-яЁёІіЎў");
static KOREAN: CleaningStrategy = CleaningStrategy::new("korean", "가-힣");

/// Get the cleaning strategy bound to `lang`.
pub fn strategy_for(lang: Lang) -> &'static CleaningStrategy {
    match lang {
        Lang::En => &ENGLISH,
        Lang::Pt => &PORTUGUESE,
        Lang::Fr => &FRENCH,
        Lang::It => &ITALIAN,
        Lang::Es => &SPANISH,
        Lang::De => &GERMAN,
        Lang::Ru => &RUSSIAN,
        Lang::Be => &BELARUSIAN,
        Lang::Ko => &KOREAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_contents() {
        let class = strategy_for(Lang::Ru).class();
        assert!(class.starts_with("А-Яа-яЁё0-9"));
        assert!(class.ends_with(PUNCT));
    }

    #[test]
    fn belarusian_extends_russian() {
        let ru = strategy_for(Lang::Ru);
        let be = strategy_for(Lang::Be);
        assert!(be.letters().starts_with(ru.letters()));
        assert_eq!(be.name(), "belarusian");
    }

    #[test]
    fn latin_strategies_share_ascii() {
        for lang in [Lang::En, Lang::Pt, Lang::Fr, Lang::It, Lang::Es, Lang::De] {
            assert!(strategy_for(lang).letters().starts_with("A-Za-z"));
        }
    }
}

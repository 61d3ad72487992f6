//! Annotated document types.
//!
//! Mirrors the CoNLL-U data model: a document is a list of sentences,
//! a sentence is a list of tokens carrying the ten CoNLL-U fields.
use std::fmt;
use std::str::FromStr;

/// Token index inside a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenId {
    /// Syntactic word (`3`).
    Word(usize),
    /// Multi-word token spanning several words (`3-4`).
    Range(usize, usize),
    /// Empty node (`3.1`).
    Empty(usize, usize),
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenId::Word(id) => write!(f, "{}", id),
            TokenId::Range(start, end) => write!(f, "{}-{}", start, end),
            TokenId::Empty(id, sub) => write!(f, "{}.{}", id, sub),
        }
    }
}

impl FromStr for TokenId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |n: &str| {
            n.parse::<usize>()
                .map_err(|_| format!("invalid token id {:?}", s))
        };

        if let Some((start, end)) = s.split_once('-') {
            Ok(TokenId::Range(parse(start)?, parse(end)?))
        } else if let Some((id, sub)) = s.split_once('.') {
            Ok(TokenId::Empty(parse(id)?, parse(sub)?))
        } else {
            Ok(TokenId::Word(parse(s)?))
        }
    }
}

/// A CoNLL-U line. Unknown fields are [None].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    pub form: String,
    pub lemma: Option<String>,
    pub upos: Option<String>,
    pub xpos: Option<String>,
    pub feats: Option<String>,
    pub head: Option<usize>,
    pub deprel: Option<String>,
    pub deps: Option<String>,
    pub misc: Option<String>,
}

impl Token {
    /// Create a token with only id and form set.
    pub fn new(id: TokenId, form: String) -> Self {
        Self {
            id,
            form,
            lemma: None,
            upos: None,
            xpos: None,
            feats: None,
            head: None,
            deprel: None,
            deps: None,
            misc: None,
        }
    }

    /// Iterate over `|`-separated MISC entries.
    pub fn misc_entries(&self) -> impl Iterator<Item = &str> {
        self.misc
            .as_deref()
            .unwrap_or_default()
            .split('|')
            .filter(|entry| !entry.is_empty())
    }

    /// `false` if MISC holds `SpaceAfter=No`.
    pub fn space_after(&self) -> bool {
        !self.misc_entries().any(|entry| entry == "SpaceAfter=No")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub id: Option<String>,
    pub text: String,
    /// Other comment lines, without the leading `#`.
    pub comments: Vec<String>,
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Rebuild the surface text from token forms and `SpaceAfter`.
    ///
    /// words that are part of a multi-word token and empty nodes are skipped.
    pub fn surface_text(&self) -> String {
        let mut text = String::new();
        let mut covered_until = 0;
        for token in &self.tokens {
            match token.id {
                TokenId::Empty(..) => continue,
                TokenId::Word(id) if id <= covered_until => continue,
                TokenId::Range(_, end) => covered_until = end,
                TokenId::Word(_) => (),
            }
            text.push_str(&token.form);
            if token.space_after() {
                text.push(' ');
            }
        }
        text.trim_end().to_string()
    }

    /// Syntactic words (no multi-word tokens, no empty nodes).
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(|token| matches!(token.id, TokenId::Word(_)))
    }
}

/// Annotation result for a single text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedDocument {
    pub sentences: Vec<Sentence>,
}

impl AnnotatedDocument {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn nb_words(&self) -> usize {
        self.sentences.iter().map(|s| s.words().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: usize, form: &str, misc: Option<&str>) -> Token {
        let mut token = Token::new(TokenId::Word(id), form.to_string());
        token.misc = misc.map(String::from);
        token
    }

    #[test]
    fn token_ids() {
        for (raw, id) in [
            ("1", TokenId::Word(1)),
            ("2-3", TokenId::Range(2, 3)),
            ("4.1", TokenId::Empty(4, 1)),
        ] {
            assert_eq!(raw.parse::<TokenId>().unwrap(), id);
            assert_eq!(id.to_string(), raw);
        }
        assert!("a".parse::<TokenId>().is_err());
        assert!("1-".parse::<TokenId>().is_err());
    }

    #[test]
    fn space_after() {
        assert!(word(1, "a", None).space_after());
        assert!(word(1, "a", Some("start_char=0|end_char=1")).space_after());
        assert!(!word(1, "a", Some("start_char=0|end_char=1|SpaceAfter=No")).space_after());
    }

    #[test]
    fn surface_text_with_multiword() {
        let del = Token::new(TokenId::Range(2, 3), "del".to_string());
        let sentence = Sentence {
            tokens: vec![
                word(1, "Vengo", None),
                del,
                word(2, "de", None),
                word(3, "el", None),
                word(4, "cine", Some("SpaceAfter=No")),
                word(5, ".", None),
            ],
            ..Default::default()
        };
        assert_eq!(sentence.surface_text(), "Vengo del cine.");
        assert_eq!(sentence.words().count(), 5);
    }
}

//! Annotator trait and processor selection.
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::Error;

use super::AnnotatedDocument;

/// NLP processing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Processor {
    Tokenize,
    Pos,
    Lemma,
}

impl FromStr for Processor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tokenize" => Ok(Processor::Tokenize),
            "pos" => Ok(Processor::Pos),
            "lemma" => Ok(Processor::Lemma),
            other => Err(Error::UnknownProcessor(other.to_string())),
        }
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Processor::Tokenize => "tokenize",
            Processor::Pos => "pos",
            Processor::Lemma => "lemma",
        };
        write!(f, "{}", name)
    }
}

/// Ordered set of processors. Tokenization is always part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processors(Vec<Processor>);

impl Processors {
    pub fn new(processors: impl IntoIterator<Item = Processor>) -> Self {
        let processors = std::iter::once(Processor::Tokenize)
            .chain(processors)
            .sorted()
            .dedup()
            .collect();
        Self(processors)
    }

    pub fn contains(&self, processor: Processor) -> bool {
        self.0.contains(&processor)
    }

    /// `true` if the tagger has to be run (pos and/or lemma).
    pub fn needs_tagger(&self) -> bool {
        self.contains(Processor::Pos) || self.contains(Processor::Lemma)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Processor> {
        self.0.iter()
    }

    /// Blank out the fields of processors that were not requested.
    ///
    /// Syntax (head/deprel/deps) is never requested.
    pub fn mask(&self, doc: &mut AnnotatedDocument) {
        let pos = self.contains(Processor::Pos);
        let lemma = self.contains(Processor::Lemma);
        for token in doc.sentences.iter_mut().flat_map(|s| s.tokens.iter_mut()) {
            if !pos {
                token.upos = None;
                token.xpos = None;
                token.feats = None;
            }
            if !lemma {
                token.lemma = None;
            }
            token.head = None;
            token.deprel = None;
            token.deps = None;
        }
    }
}

impl Default for Processors {
    fn default() -> Self {
        Self::new([Processor::Tokenize])
    }
}

impl FromStr for Processors {
    type Err = Error;

    /// Parse a comma separated list, such as `tokenize,pos,lemma`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let processors = s
            .split(',')
            .filter(|p| !p.trim().is_empty())
            .map(Processor::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(processors))
    }
}

impl fmt::Display for Processors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

/// NLP pipeline seam.
///
/// Implementors get one call per cleaned, non-empty text.
pub trait Annotator {
    /// Processors that are run on each text.
    fn processors(&self) -> &Processors;

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, Error>;
}

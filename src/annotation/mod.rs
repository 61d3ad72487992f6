/*! NLP annotation.

Every cleaned text goes through an [Annotator], that returns an [AnnotatedDocument].

Two backends are available:
- [Tokenizer], a built-in rule based tokenizer (tokenization only),
- [UdpipeService], that delegates tokenization, tagging and lemmatization to a UDPipe REST service.
!*/
mod annotator;
mod document;
mod tokenizer;
mod udpipe;

use std::str::FromStr;

use log::info;

use crate::error::Error;
use crate::lang::Lang;

pub use annotator::{Annotator, Processor, Processors};
pub use document::{AnnotatedDocument, Sentence, Token, TokenId};
pub use tokenizer::Tokenizer;
pub use udpipe::{UdpipeService, DEFAULT_ENDPOINT as DEFAULT_UDPIPE_ENDPOINT};

/// Available annotation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotatorKind {
    Builtin,
    Udpipe,
}

impl Default for AnnotatorKind {
    fn default() -> Self {
        AnnotatorKind::Builtin
    }
}

impl FromStr for AnnotatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "builtin" => Ok(AnnotatorKind::Builtin),
            "udpipe" => Ok(AnnotatorKind::Udpipe),
            other => Err(Error::Custom(format!(
                "unknown annotator {:?} (expected builtin or udpipe)",
                other
            ))),
        }
    }
}

/// Annotation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorConfig {
    pub kind: AnnotatorKind,
    pub processors: Processors,
    pub udpipe_endpoint: String,
    /// overrides the language default model
    pub model: Option<String>,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            kind: AnnotatorKind::default(),
            processors: Processors::default(),
            udpipe_endpoint: DEFAULT_UDPIPE_ENDPOINT.to_string(),
            model: None,
        }
    }
}

impl AnnotatorConfig {
    /// Build the annotator for `lang`.
    pub fn build(&self, lang: Lang) -> Result<Box<dyn Annotator>, Error> {
        info!(
            "[{}] using {:?} annotator ({})",
            lang, self.kind, self.processors
        );
        let annotator: Box<dyn Annotator> = match self.kind {
            AnnotatorKind::Builtin => Box::new(Tokenizer::new(&self.processors)?),
            AnnotatorKind::Udpipe => Box::new(UdpipeService::new(
                &self.udpipe_endpoint,
                lang,
                self.model.clone(),
                self.processors.clone(),
            )?),
        };
        Ok(annotator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            AnnotatorKind::from_str("builtin").unwrap(),
            AnnotatorKind::Builtin
        );
        assert_eq!(
            AnnotatorKind::from_str("udpipe").unwrap(),
            AnnotatorKind::Udpipe
        );
        assert!(AnnotatorKind::from_str("stanza").is_err());
    }

    #[test]
    fn build_default() {
        let annotator = AnnotatorConfig::default().build(Lang::En).unwrap();
        assert_eq!(annotator.processors(), &Processors::default());
        let doc = annotator.annotate("One. Two.").unwrap();
        assert_eq!(doc.sentences.len(), 2);
    }

    #[test]
    fn builtin_cannot_tag() {
        let config = AnnotatorConfig {
            processors: "tokenize,pos,lemma".parse().unwrap(),
            ..Default::default()
        };
        assert!(config.build(Lang::En).is_err());

        let config = AnnotatorConfig {
            kind: AnnotatorKind::Udpipe,
            ..config
        };
        assert!(config.build(Lang::En).is_ok());
    }
}

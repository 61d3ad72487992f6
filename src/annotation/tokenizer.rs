//! Rule based tokenizer.
//!
//! Uses Unicode text segmentation (UAX #29) to find sentence and word boundaries.
//! Offsets are given in characters from the start of the text,
//! and stored in MISC the way neural pipelines do (`start_char=0|end_char=5`).
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

use super::{AnnotatedDocument, Annotator, Processor, Processors, Sentence, Token, TokenId};

/// Tokenization only annotator.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    processors: Processors,
}

impl Tokenizer {
    /// Fails if anything else than tokenization is requested.
    pub fn new(processors: &Processors) -> Result<Self, Error> {
        if let Some(unsupported) = processors.iter().find(|p| **p != Processor::Tokenize) {
            return Err(Error::Annotation(format!(
                "built-in tokenizer can't run the {} processor",
                unsupported
            )));
        }

        Ok(Self::default())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            processors: Processors::default(),
        }
    }
}

struct Span<'a> {
    form: &'a str,
    /// byte offset of the span in the text
    byte: usize,
    start: usize,
    end: usize,
}

impl Annotator for Tokenizer {
    fn processors(&self) -> &Processors {
        &self.processors
    }

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, Error> {
        // split in sentences, keeping the character offset of each word segment
        let mut offset = 0;
        let mut sentences: Vec<Vec<Span>> = Vec::new();
        for (sentence_byte, sentence) in text.split_sentence_bound_indices() {
            let mut spans = Vec::new();
            for (segment_byte, segment) in sentence.split_word_bound_indices() {
                let len = segment.chars().count();
                if !segment.chars().all(char::is_whitespace) {
                    spans.push(Span {
                        form: segment,
                        byte: sentence_byte + segment_byte,
                        start: offset,
                        end: offset + len,
                    });
                }
                offset += len;
            }
            if !spans.is_empty() {
                sentences.push(spans);
            }
        }

        // next token start, used to detect missing spaces across sentence boundaries
        let starts: Vec<usize> = sentences.iter().flatten().map(|span| span.start).collect();
        let mut next_starts = starts.into_iter().skip(1);

        let sentences = sentences
            .into_iter()
            .enumerate()
            .map(|(idx, spans)| {
                let first = spans.first().map_or(0, |s| s.byte);
                let last = spans.last().map_or(0, |s| s.byte + s.form.len());
                let sentence_text = text[first..last].to_string();

                let tokens = spans
                    .into_iter()
                    .enumerate()
                    .map(|(word_idx, span)| {
                        let mut misc = format!("start_char={}|end_char={}", span.start, span.end);
                        if next_starts.next() == Some(span.end) {
                            misc.push_str("|SpaceAfter=No");
                        }
                        let mut token = Token::new(TokenId::Word(word_idx + 1), span.form.to_string());
                        token.misc = Some(misc);
                        token
                    })
                    .collect();

                Sentence {
                    id: Some((idx + 1).to_string()),
                    text: sentence_text,
                    comments: Vec::new(),
                    tokens,
                }
            })
            .collect();

        Ok(AnnotatedDocument::new(sentences))
    }
}

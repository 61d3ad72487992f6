//! CoNLL-U serialization.
//!
//! ```text
//! # sent_id = 1
//! # text = Hello, world!
//! 1	Hello	_	_	_	_	_	_	_	start_char=0|end_char=5|SpaceAfter=No
//! 2	,	_	_	_	_	_	_	_	start_char=5|end_char=6
//! ...
//!
//! ```
//! Sentences are terminated by a blank line.
use std::io::Write;

use crate::annotation::{AnnotatedDocument, Sentence, Token, TokenId};

const NB_COLUMNS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("_")
}

fn write_token<W: Write>(token: &Token, w: &mut W) -> std::io::Result<()> {
    let head = token.head.map(|h| h.to_string());
    writeln!(
        w,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        token.id,
        token.form,
        field(&token.lemma),
        field(&token.upos),
        field(&token.xpos),
        field(&token.feats),
        field(&head),
        field(&token.deprel),
        field(&token.deps),
        field(&token.misc),
    )
}

/// Write a sentence block, blank line included.
pub fn write_sentence<W: Write>(sentence: &Sentence, w: &mut W) -> std::io::Result<()> {
    for comment in &sentence.comments {
        writeln!(w, "# {}", comment)?;
    }
    if let Some(id) = &sentence.id {
        writeln!(w, "# sent_id = {}", id)?;
    }
    writeln!(w, "# text = {}", sentence.text.replace('\n', " "))?;
    for token in &sentence.tokens {
        write_token(token, w)?;
    }
    writeln!(w)
}

/// Write every sentence of `doc`.
pub fn write_document<W: Write>(doc: &AnnotatedDocument, w: &mut W) -> std::io::Result<()> {
    for sentence in &doc.sentences {
        write_sentence(sentence, w)?;
    }
    Ok(())
}

/// Serialize `doc` into a [String].
pub fn to_string(doc: &AnnotatedDocument) -> std::io::Result<String> {
    let mut buf = Vec::new();
    write_document(doc, &mut buf)?;
    String::from_utf8(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Get the value of a `key = value` comment.
fn comment_value<'a>(comment: &'a str, key: &str) -> Option<&'a str> {
    comment
        .strip_prefix(key)?
        .trim_start()
        .strip_prefix('=')
        .map(str::trim)
}

fn parse_token(line: &str, line_nb: usize) -> Result<Token, ParseError> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != NB_COLUMNS {
        return Err(ParseError::new(
            line_nb,
            format!(
                "expected {} columns, found {}",
                NB_COLUMNS,
                columns.len()
            ),
        ));
    }

    let opt = |value: &str| match value {
        "_" => None,
        v => Some(v.to_string()),
    };

    let id: TokenId = columns[0]
        .parse()
        .map_err(|e: String| ParseError::new(line_nb, e))?;
    let head = match columns[6] {
        "_" => None,
        h => Some(
            h.parse::<usize>()
                .map_err(|_| ParseError::new(line_nb, format!("invalid head {:?}", h)))?,
        ),
    };

    Ok(Token {
        id,
        form: columns[1].to_string(),
        lemma: opt(columns[2]),
        upos: opt(columns[3]),
        xpos: opt(columns[4]),
        feats: opt(columns[5]),
        head,
        deprel: opt(columns[7]),
        deps: opt(columns[8]),
        misc: opt(columns[9]),
    })
}

fn finish(mut sentence: Sentence, has_text: bool) -> Sentence {
    if !has_text {
        sentence.text = sentence.surface_text();
    }
    sentence
}

/// Parse CoNLL-U content.
///
/// Comment-only blocks (such as `# newdoc`) are attached to the next sentence.
pub fn parse_document(content: &str) -> Result<AnnotatedDocument, ParseError> {
    let mut sentences = Vec::new();
    let mut current = Sentence::default();
    let mut has_text = false;

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        let line_nb = idx + 1;

        if line.trim().is_empty() {
            if !current.tokens.is_empty() {
                sentences.push(finish(std::mem::take(&mut current), has_text));
                has_text = false;
            }
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            let comment = comment.trim();
            if let Some(id) = comment_value(comment, "sent_id") {
                current.id = Some(id.to_string());
            } else if let Some(text) = comment_value(comment, "text") {
                current.text = text.to_string();
                has_text = true;
            } else {
                current.comments.push(comment.to_string());
            }
            continue;
        }

        current.tokens.push(parse_token(line, line_nb)?);
    }

    if !current.tokens.is_empty() {
        sentences.push(finish(current, has_text));
    }

    Ok(AnnotatedDocument::new(sentences))
}

//! Corpus record.
use serde::{Deserialize, Serialize};

/// One corpus entry (a Wikipedia article).
///
/// Only `text` is used by the pipeline. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl Record {
    pub fn new(text: String) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }

    /// `true` if text is empty or only made of whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

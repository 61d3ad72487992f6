/*! Corpus sources.

Records come either from the dataset server ([HubRows]) or from a local JSON lines dump ([JsonLines]).

A [Source] can be opened in two [LoadMode]s:
- [LoadMode::Stream] yields records lazily, page by page for remote sources,
- [LoadMode::Full] materializes the whole split in memory.
!*/
mod hub;
mod jsonl;
mod record;

use std::path::PathBuf;
use std::str::FromStr;

use log::info;

use crate::error::Error;

pub use hub::{
    HubRows, HubSplit, DEFAULT_DATASET, DEFAULT_ENDPOINT, DEFAULT_SNAPSHOT, DEFAULT_SPLIT,
    MAX_PAGE_LEN,
};
pub use jsonl::JsonLines;
pub use record::Record;

/// Fallible record iterator.
pub type RecordIter = Box<dyn Iterator<Item = Result<Record, Error>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Stream,
    Full,
}

impl Default for LoadMode {
    fn default() -> Self {
        LoadMode::Stream
    }
}

impl FromStr for LoadMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stream" | "streaming" => Ok(LoadMode::Stream),
            "full" => Ok(LoadMode::Full),
            other => Err(Error::Custom(format!(
                "unknown load mode {:?} (expected stream or full)",
                other
            ))),
        }
    }
}

/// Opened records.
pub enum Records {
    Stream(RecordIter),
    Table(Vec<Record>),
}

impl std::fmt::Debug for Records {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Records::Stream(_) => write!(f, "Records::Stream"),
            Records::Table(t) => write!(f, "Records::Table({} records)", t.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Hub { split: HubSplit, page_len: usize },
    File(PathBuf),
}

impl Source {
    /// Open the source.
    ///
    /// Any error returned here is a load failure.
    /// In [LoadMode::Full], errors raised while reading records are load failures too.
    pub fn open(&self, mode: LoadMode) -> Result<Records, Error> {
        let iter: RecordIter = match self {
            Source::Hub { split, page_len } => Box::new(HubRows::open(split.clone(), *page_len)?),
            Source::File(path) => Box::new(JsonLines::from_path(path)?),
        };

        match mode {
            LoadMode::Stream => Ok(Records::Stream(iter)),
            LoadMode::Full => {
                let table = iter.collect::<Result<Vec<Record>, Error>>()?;
                info!("loaded {} records", table.len());
                Ok(Records::Table(table))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_modes() {
        assert_eq!(LoadMode::from_str("stream").unwrap(), LoadMode::Stream);
        assert_eq!(LoadMode::from_str("full").unwrap(), LoadMode::Full);
        assert!(LoadMode::from_str("lazy").is_err());
        assert_eq!(LoadMode::default(), LoadMode::Stream);
    }

    #[test]
    fn open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"text":"one"}}"#).unwrap();
        writeln!(file, r#"{{"text":"two"}}"#).unwrap();
        let source = Source::File(file.path().to_path_buf());

        match source.open(LoadMode::Full).unwrap() {
            Records::Table(t) => assert_eq!(t.len(), 2),
            other => panic!("expected table, got {:?}", other),
        }
        match source.open(LoadMode::Stream).unwrap() {
            Records::Stream(s) => assert_eq!(s.count(), 2),
            other => panic!("expected stream, got {:?}", other),
        }
    }

    #[test]
    fn full_load_fails_on_bad_record() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"text":"one"}}"#).unwrap();
        writeln!(file, "{{").unwrap();
        let source = Source::File(file.path().to_path_buf());

        assert!(source.open(LoadMode::Full).is_err());
        assert!(source.open(LoadMode::Stream).is_ok());
    }
}

//! Local JSON lines dumps.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::error::Error;

use super::Record;

/// JSON lines reader, generic over reader type.
///
/// Yields one [Record] per non-blank line.
pub struct JsonLines<R> {
    lines: Lines<R>,
}

impl JsonLines<Box<dyn BufRead>> {
    /// Open a dump, using a multi gz decoder if the file ends with `.gz`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let gzipped = path.extension().map_or(false, |ext| ext == "gz");
        debug!("opening {:?} (gzip: {})", path, gzipped);

        let reader: Box<dyn BufRead> = if gzipped {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        Ok(Self::new(reader))
    }
}

impl<R: BufRead> JsonLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for JsonLines<R> {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };

            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str(&line).map_err(Error::from));
        }
    }
}

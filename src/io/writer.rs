//! CoNLL-U file writer for a given language.
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::annotation::AnnotatedDocument;
use crate::error::Error;
use crate::lang::Lang;

use super::conllu;

/// Writes annotated documents into `<dst>/output_<lang>.conllu`.
///
/// Note that nothing is created unless a write is performed
/// or [ConlluWriter::create] is called.
/// Each document is followed by an extra blank line.
pub struct ConlluWriter {
    path: PathBuf,
    append: bool,
    handle: Option<BufWriter<File>>,
    nb_documents: u64,
}

impl ConlluWriter {
    /// Create a new [ConlluWriter].
    ///
    /// If `append` is false, an existing file is truncated on first write.
    pub fn new(dst: &Path, lang: Lang, append: bool) -> Self {
        Self {
            path: dst.join(Self::filename(lang)),
            append,
            handle: None,
            nb_documents: 0,
        }
    }

    pub fn filename(lang: Lang) -> String {
        format!("output_{}.conllu", lang)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of documents written so far.
    pub fn nb_documents(&self) -> u64 {
        self.nb_documents
    }

    fn open(&mut self) -> Result<&mut BufWriter<File>, Error> {
        if self.handle.is_none() {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let mut options = OpenOptions::new();
            options.create(true);
            if self.append {
                options.append(true);
            } else {
                options.write(true).truncate(true);
            }

            info!("creating {:?} (append: {})", self.path, self.append);
            self.handle = Some(BufWriter::new(options.open(&self.path)?));
        }

        self.handle
            .as_mut()
            .ok_or_else(|| Error::Custom(format!("could not open {:?}", self.path)))
    }

    /// Open the output file now.
    ///
    /// Without `append`, this truncates whatever a previous run left,
    /// even if no document gets written afterwards.
    pub fn create(&mut self) -> Result<(), Error> {
        self.open().map(|_| ())
    }

    /// Write a document block and its separator.
    pub fn write_document(&mut self, doc: &AnnotatedDocument) -> Result<(), Error> {
        let handle = self.open()?;
        conllu::write_document(doc, handle)?;
        handle.write_all(b"\n")?;

        self.nb_documents += 1;
        debug!(
            "wrote document {} ({} sentences)",
            self.nb_documents,
            doc.sentences.len()
        );
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        match &mut self.handle {
            Some(handle) => Ok(handle.flush()?),
            None => Ok(()),
        }
    }
}

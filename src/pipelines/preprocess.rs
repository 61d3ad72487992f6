//! Wikipedia to CoNLL-U pipeline
//!
//! # Processing
//! 1. The source is opened (streamed or fully loaded). A load failure is logged and the run stops without output.
//! 1. The annotator is built.
//! 1. Records are sampled: truncated when streaming, randomly drawn (fixed seed) when fully loaded.
//! 1. Each record is cleaned with the language [Cleaner], empty texts being skipped.
//! 1. Remaining texts are annotated and written as CoNLL-U blocks.
//!
//! Everything after the source is opened is sequential, and any error aborts the run.
use std::path::PathBuf;

use log::{debug, error, info};

use crate::annotation::{Annotator, AnnotatorConfig};
use crate::cleaning::Cleaner;
use crate::error::Error;
use crate::io::ConlluWriter;
use crate::lang::Lang;
use crate::sampling::{Sampling, DEFAULT_SEED};
use crate::sources::{LoadMode, RecordIter, Records, Source};

use super::Pipeline;

/// Pipeline parameters.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub lang: Lang,
    pub source: Source,
    pub mode: LoadMode,
    /// `0` keeps every record
    pub sample_size: usize,
    pub seed: u64,
    pub annotator: AnnotatorConfig,
    /// output folder
    pub dst: PathBuf,
    pub append: bool,
}

impl PipelineConfig {
    /// Streaming configuration with the built-in tokenizer, writing in `data/`.
    pub fn new(lang: Lang, source: Source) -> Self {
        Self {
            lang,
            source,
            mode: LoadMode::default(),
            sample_size: 0,
            seed: DEFAULT_SEED,
            annotator: AnnotatorConfig::default(),
            dst: PathBuf::from("data"),
            append: false,
        }
    }

    fn sampling(&self) -> Sampling {
        match self.mode {
            LoadMode::Stream => Sampling::streaming(self.sample_size),
            LoadMode::Full => Sampling::materialized(self.sample_size, self.seed),
        }
    }
}

/// Record counts of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub read: u64,
    /// records with a blank text
    pub blank: u64,
    /// records with nothing left after cleaning
    pub cleaned_out: u64,
    pub written: u64,
}

pub struct Preprocess {
    config: PipelineConfig,
}

impl Preprocess {
    pub fn new(config: PipelineConfig) -> Self {
        debug!("pipeline config: {:#?}", config);
        Self { config }
    }

    /// Clean, annotate and write `records`.
    pub fn process(
        &self,
        records: RecordIter,
        cleaner: &Cleaner,
        annotator: &dyn Annotator,
        writer: &mut ConlluWriter,
    ) -> Result<Stats, Error> {
        let mut stats = Stats::default();
        for record in records {
            let record = record?;
            stats.read += 1;

            if record.is_blank() {
                stats.blank += 1;
                continue;
            }

            let text = cleaner.clean(&record.text);
            if text.is_empty() {
                debug!("record {:?} has no text left after cleaning", record.id);
                stats.cleaned_out += 1;
                continue;
            }

            let doc = annotator.annotate(&text)?;
            writer.write_document(&doc)?;
            stats.written += 1;
        }

        writer.flush()?;
        Ok(stats)
    }
}

impl Pipeline<Option<PathBuf>> for Preprocess {
    fn run(&self) -> Result<Option<PathBuf>, Error> {
        let lang = self.config.lang;

        let records = match self.config.source.open(self.config.mode) {
            Ok(records) => records,
            Err(e) => {
                error!("[{}] Data Load Fail: {:?}", lang, e);
                return Ok(None);
            }
        };

        let cleaner = Cleaner::new(lang)?;
        let annotator = self.config.annotator.build(lang)?;

        let sampling = self.config.sampling();
        debug!("[{}] sampling: {:?}", lang, sampling);
        let records: RecordIter = match records {
            Records::Stream(iter) => sampling.apply(iter),
            Records::Table(table) => sampling.apply(table.into_iter().map(Ok)),
        };

        let mut writer = ConlluWriter::new(&self.config.dst, lang, self.config.append);
        if !self.config.append {
            writer.create()?;
        }
        let stats = self.process(records, &cleaner, annotator.as_ref(), &mut writer)?;

        info!(
            "[{}] read {} records, skipped {} blank and {} empty after cleaning, wrote {} documents to {:?}",
            lang,
            stats.read,
            stats.blank,
            stats.cleaned_out,
            stats.written,
            writer.path()
        );

        Ok(Some(writer.path().to_path_buf()))
    }
}

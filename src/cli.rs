//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

use wikiconllu::annotation::{AnnotatorConfig, AnnotatorKind, Processors};
use wikiconllu::error::Error;
use wikiconllu::lang::Lang;
use wikiconllu::pipelines::PipelineConfig;
use wikiconllu::sampling::DEFAULT_SEED;
use wikiconllu::sources::{HubSplit, LoadMode, Source, MAX_PAGE_LEN};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "wikiconllu",
    about = "Wikipedia to CoNLL-U corpus preparation tool."
)]
/// Preprocessing command and parameters.
///
/// ```sh
/// USAGE:
///     wikiconllu [FLAGS] [OPTIONS] --language <language>
///
/// FLAGS:
///         --append     append to an existing output file instead of truncating it
///
/// OPTIONS:
///     -l, --language <language>        language code, e.g. en, de, it, es, ko
///     -n, --sample_size <sample-size>  number of records to keep. 0 keeps everything [default: 0]
///     -i, --input <input>              local JSON lines dump (.jsonl or .jsonl.gz)
///     -o, --dst <dst>                  output folder [default: data]
/// ```
pub struct Preprocess {
    #[structopt(short = "l", long = "language", help = "language code, e.g. en, de, it, es, ko")]
    pub language: String,
    #[structopt(
        short = "n",
        long = "sample_size",
        default_value = "0",
        help = "number of records to keep. 0 keeps everything"
    )]
    pub sample_size: usize,
    #[structopt(
        long = "mode",
        default_value = "stream",
        possible_values = &["stream", "full"],
        help = "stream records or load the whole split (random sampling)"
    )]
    pub mode: String,
    #[structopt(long = "seed", help = "random sampling seed (full mode)")]
    pub seed: Option<u64>,
    #[structopt(
        short = "i",
        long = "input",
        parse(from_os_str),
        help = "local JSON lines dump (.jsonl or .jsonl.gz)"
    )]
    pub input: Option<PathBuf>,
    #[structopt(long = "snapshot", default_value = "20231101", help = "Wikipedia dump date")]
    pub snapshot: String,
    #[structopt(long = "dataset", default_value = "wikimedia/wikipedia")]
    pub dataset: String,
    #[structopt(long = "split", default_value = "train")]
    pub split: String,
    #[structopt(
        long = "hub-endpoint",
        env = "WIKICONLLU_HUB_ENDPOINT",
        default_value = "https://datasets-server.huggingface.co",
        help = "dataset server url"
    )]
    pub hub_endpoint: String,
    #[structopt(
        long = "annotator",
        default_value = "builtin",
        possible_values = &["builtin", "udpipe"]
    )]
    pub annotator: String,
    #[structopt(
        long = "processors",
        default_value = "tokenize",
        help = "comma separated processors: tokenize, pos, lemma"
    )]
    pub processors: String,
    #[structopt(
        long = "udpipe-endpoint",
        env = "WIKICONLLU_UDPIPE_ENDPOINT",
        default_value = "https://lindat.mff.cuni.cz/services/udpipe/api"
    )]
    pub udpipe_endpoint: String,
    #[structopt(long = "model", help = "UDPipe model, defaults to the language one")]
    pub model: Option<String>,
    #[structopt(
        short = "o",
        long = "dst",
        parse(from_os_str),
        default_value = "data",
        help = "output folder"
    )]
    pub dst: PathBuf,
    #[structopt(
        long = "append",
        help = "append to an existing output file instead of truncating it"
    )]
    pub append: bool,
}

impl Preprocess {
    /// Validate arguments and build the pipeline configuration.
    pub fn into_config(self) -> Result<PipelineConfig, Error> {
        let lang = Lang::from_str(&self.language)?;

        let source = match self.input {
            Some(path) => Source::File(path),
            None => Source::Hub {
                split: HubSplit {
                    endpoint: self.hub_endpoint,
                    dataset: self.dataset,
                    config: format!("{}.{}", self.snapshot, lang),
                    split: self.split,
                },
                page_len: MAX_PAGE_LEN,
            },
        };

        let annotator = AnnotatorConfig {
            kind: AnnotatorKind::from_str(&self.annotator)?,
            processors: Processors::from_str(&self.processors)?,
            udpipe_endpoint: self.udpipe_endpoint,
            model: self.model,
        };

        Ok(PipelineConfig {
            lang,
            source,
            mode: LoadMode::from_str(&self.mode)?,
            sample_size: self.sample_size,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            annotator,
            dst: self.dst,
            append: self.append,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Preprocess {
        Preprocess::from_iter_safe(std::iter::once("wikiconllu").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&["--language", "ko"]).into_config().unwrap();
        assert_eq!(config.lang, Lang::Ko);
        assert_eq!(config.sample_size, 0);
        assert_eq!(config.mode, LoadMode::Stream);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.dst, PathBuf::from("data"));
        assert!(!config.append);
        match config.source {
            Source::Hub { split, page_len } => {
                assert_eq!(split.dataset, "wikimedia/wikipedia");
                assert_eq!(split.config, "20231101.ko");
                assert_eq!(page_len, MAX_PAGE_LEN);
            }
            other => panic!("expected hub source, got {:?}", other),
        }
    }

    #[test]
    fn local_full() {
        let config = parse(&[
            "-l", "fr", "-n", "100", "--mode", "full", "--seed", "7", "-i", "dump.jsonl.gz",
            "--annotator", "udpipe", "--processors", "tokenize,pos,lemma",
        ])
        .into_config()
        .unwrap();
        assert_eq!(config.source, Source::File(PathBuf::from("dump.jsonl.gz")));
        assert_eq!(config.mode, LoadMode::Full);
        assert_eq!(config.sample_size, 100);
        assert_eq!(config.seed, 7);
        assert_eq!(config.annotator.kind, AnnotatorKind::Udpipe);
        assert!(config.annotator.processors.needs_tagger());
    }

    #[test]
    fn defaults_match_library() {
        use wikiconllu::annotation::DEFAULT_UDPIPE_ENDPOINT;
        use wikiconllu::sources::{DEFAULT_DATASET, DEFAULT_ENDPOINT, DEFAULT_SNAPSHOT, DEFAULT_SPLIT};

        let opt = parse(&["-l", "en"]);
        assert_eq!(opt.snapshot, DEFAULT_SNAPSHOT);
        assert_eq!(opt.dataset, DEFAULT_DATASET);
        assert_eq!(opt.split, DEFAULT_SPLIT);
        assert_eq!(opt.hub_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(opt.udpipe_endpoint, DEFAULT_UDPIPE_ENDPOINT);
    }

    #[test]
    fn invalid_language() {
        assert!(matches!(
            parse(&["-l", "xx"]).into_config(),
            Err(Error::UnknownLang(_))
        ));
    }

    #[test]
    fn language_is_required() {
        assert!(Preprocess::from_iter_safe(vec!["wikiconllu"]).is_err());
    }
}

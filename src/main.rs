//! # wikiconllu
//!
//! Turns a Wikipedia dump into a CoNLL-U corpus for a given language:
//! records are cleaned from characters that are not part of the language alphabet,
//! tokenized (and optionally tagged) then written to `data/output_<lang>.conllu`.
//!
//! ```sh
//! wikiconllu --language en --sample_size 1000
//! wikiconllu -l ko -i kowiki.jsonl.gz --mode full -n 500
//! RUST_LOG=info wikiconllu -l fr --annotator udpipe --processors tokenize,pos,lemma
//! ```
use structopt::StructOpt;

use wikiconllu::error::Error;
use wikiconllu::pipelines::{Pipeline, Preprocess};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Preprocess::from_args();
    debug!("cli args\n{:#?}", opt);

    let pipeline = Preprocess::new(opt.into_config()?);
    match pipeline.run()? {
        Some(path) => info!("corpus written to {:?}", path),
        None => warn!("no corpus written"),
    }

    Ok(())
}

/*!
# IO utilities

CoNLL-U serialization ([conllu]) and per-language output files ([ConlluWriter]).
!*/
pub mod conllu;
mod writer;

pub use writer::ConlluWriter;

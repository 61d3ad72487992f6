//! Pipeline trait.
use crate::error::Error;

/// A runnable pipeline, generic over what a run produces.
///
/// [super::Preprocess] yields the path of the written file,
/// or nothing if the dataset could not be loaded.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}

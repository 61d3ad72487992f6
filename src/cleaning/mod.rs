/*! Character-level text cleaning.

Each language is bound to a [CleaningStrategy], that describes the alphabet that is kept.
A [Cleaner] compiles that strategy once and is then used on every record of a run:

1. newlines are replaced by spaces,
1. characters outside the allow-list are removed,
1. whitespace runs are collapsed into a single space and the result is trimmed.

A cleaned text can be empty, and callers have to skip it.
!*/
mod cleaner;
mod strategy;

pub use cleaner::Cleaner;
pub use strategy::{strategy_for, CleaningStrategy, PUNCT};

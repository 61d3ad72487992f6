//! Record sampling.
//!
//! Streaming sources are truncated after `n` records, while fully loaded
//! tables are randomly subsampled with a fixed seed.
//! A size of `0` disables sampling.
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default seed for random sampling.
pub const DEFAULT_SEED: u64 = 42;

/// Sampling plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Keep everything.
    All,
    /// Keep the first `n` records.
    Truncate(usize),
    /// Keep `size` records drawn at random.
    Random { size: usize, seed: u64 },
}

impl Sampling {
    /// Truncation plan for streaming sources.
    pub fn streaming(size: usize) -> Self {
        match size {
            0 => Sampling::All,
            n => Sampling::Truncate(n),
        }
    }

    /// Random plan for materialized sources.
    pub fn materialized(size: usize, seed: u64) -> Self {
        match size {
            0 => Sampling::All,
            size => Sampling::Random { size, seed },
        }
    }

    /// Apply the plan on an iterator.
    ///
    /// Random sampling has to materialize the iterator.
    pub fn apply<'a, T, I>(self, records: I) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
        I: Iterator<Item = T> + 'a,
    {
        match self {
            Sampling::All => Box::new(records),
            Sampling::Truncate(n) => Box::new(truncate(records, n)),
            Sampling::Random { size, seed } => {
                Box::new(random_sample(records.collect(), size, seed).into_iter())
            }
        }
    }
}

/// Stop `iter` after `n` items. `n == 0` keeps everything.
pub fn truncate<I: Iterator>(iter: I, n: usize) -> std::iter::Take<I> {
    let n = if n == 0 { usize::MAX } else { n };
    iter.take(n)
}

/// Draw `n` records from `records` using a seeded rng.
///
/// Nothing is done if `n == 0` or if there are not more than `n` records.
/// Kept records stay in their original order.
pub fn random_sample<T>(records: Vec<T>, n: usize, seed: u64) -> Vec<T> {
    if n == 0 || records.len() <= n {
        return records;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked = rand::seq::index::sample(&mut rng, records.len(), n).into_vec();
    picked.sort_unstable();

    debug!(
        "sampling {} records out of {} (seed {})",
        n,
        records.len(),
        seed
    );

    let mut picked = picked.into_iter().peekable();
    records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            if picked.peek() == Some(&idx) {
                picked.next();
                Some(record)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_bounds() {
        assert_eq!(truncate(0..10, 3).count(), 3);
        assert_eq!(truncate(0..2, 3).count(), 2);
        assert_eq!(truncate(0..10, 0).count(), 10);
    }

    #[test]
    fn random_bounds() {
        for (available, n) in [(100, 10), (10, 10), (5, 10), (0, 3), (20, 0)] {
            let records: Vec<usize> = (0..available).collect();
            let sampled = random_sample(records, n, DEFAULT_SEED);
            let expected = if n == 0 { available } else { n.min(available) };
            assert_eq!(sampled.len(), expected);
        }
    }

    #[test]
    fn random_is_deterministic() {
        let records: Vec<usize> = (0..1000).collect();
        let a = random_sample(records.clone(), 50, 7);
        let b = random_sample(records.clone(), 50, 7);
        let c = random_sample(records, 50, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_keeps_order_and_uniqueness() {
        let records: Vec<usize> = (0..1000).collect();
        let sampled = random_sample(records, 100, DEFAULT_SEED);
        assert!(sampled.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn plans() {
        assert_eq!(Sampling::streaming(0), Sampling::All);
        assert_eq!(Sampling::streaming(4), Sampling::Truncate(4));
        assert_eq!(Sampling::materialized(0, 1), Sampling::All);
        assert_eq!(
            Sampling::materialized(4, 1),
            Sampling::Random { size: 4, seed: 1 }
        );

        assert_eq!(Sampling::Truncate(4).apply(0..100).count(), 4);
        assert_eq!(
            Sampling::Random { size: 4, seed: 1 }.apply(0..100).count(),
            4
        );
        assert_eq!(Sampling::All.apply(0..100).count(), 100);
    }
}

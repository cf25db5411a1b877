//! Batches of unique names.
//!
//! Both bulk variants check capacity before doing any work, then generate
//! until the batch holds `count` distinct names or the attempt budget
//! (`count * retry_factor`) runs out.

use std::collections::HashSet;

use super::entropy::RandomnessSource;
use super::{generate_from_seed, seeded_generate, GenerateArgs, GeneratedName};
use crate::error::{NameError, Result, WordKind};

pub const DEFAULT_RETRY_FACTOR: usize = 20;

/// Number of names a word list pair and token shape can express, given the
/// count of distinct adjectives, nouns and alphabet characters.
/// Saturates at `u128::MAX`.
pub fn capacity(adjectives: usize, nouns: usize, alphabet: usize, token_length: u32) -> u128 {
    let token_space = (alphabet as u128)
        .checked_pow(token_length)
        .unwrap_or(u128::MAX);
    (adjectives as u128)
        .saturating_mul(nouns as u128)
        .saturating_mul(token_space)
}

/// Retry budget for bulk generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkPolicy {
    retry_factor: usize,
}

impl Default for BulkPolicy {
    fn default() -> Self {
        Self {
            retry_factor: DEFAULT_RETRY_FACTOR,
        }
    }
}

impl BulkPolicy {
    pub fn new(retry_factor: usize) -> Self {
        Self {
            retry_factor: retry_factor.max(1),
        }
    }

    pub fn retry_factor(&self) -> usize {
        self.retry_factor
    }

    fn attempts_for(&self, count: usize) -> usize {
        count.saturating_mul(self.retry_factor.max(1))
    }
}

/// Validate `args` and make sure `count` unique names can exist.
fn preflight(count: usize, args: &GenerateArgs) -> Result<()> {
    let config = args.resolve_config();
    config.validate()?;
    let (adjectives, nouns) = args.word_lists();
    adjectives.ensure_non_empty(WordKind::Adjective)?;
    nouns.ensure_non_empty(WordKind::Noun)?;

    let alphabet: HashSet<char> = config.alphabet().into_iter().collect();
    let capacity = capacity(
        adjectives.distinct_len(),
        nouns.distinct_len(),
        alphabet.len(),
        config.token_length,
    );
    if count as u128 > capacity {
        return Err(NameError::CapacityExceeded {
            requested: count,
            capacity,
        });
    }
    Ok(())
}

fn collect_unique(
    count: usize,
    policy: &BulkPolicy,
    mut attempt: impl FnMut(usize) -> Result<GeneratedName>,
) -> Result<Vec<GeneratedName>> {
    let budget = policy.attempts_for(count);
    let mut seen = HashSet::with_capacity(count);
    let mut batch = Vec::with_capacity(count);

    for index in 0..budget {
        if batch.len() == count {
            break;
        }
        let generated = attempt(index)?;
        if seen.insert(generated.name.clone()) {
            batch.push(generated);
        } else {
            tracing::trace!(index, name = %generated.name, "bulk collision, retrying");
        }
    }

    if batch.len() < count {
        return Err(NameError::RetriesExhausted {
            requested: count,
            produced: batch.len(),
            attempts: budget,
        });
    }
    Ok(batch)
}

/// Sub-seed used for the `index`th attempt of a seeded batch.
pub fn sub_seed(seed: &str, index: usize) -> String {
    format!("{seed}#{index}")
}

/// `count` unique names, reproducible from `seed` and `args`.
pub fn bulk_seeded(seed: &str, count: usize, args: &GenerateArgs) -> Result<Vec<GeneratedName>> {
    bulk_seeded_with(seed, count, args, &BulkPolicy::default())
}

pub fn bulk_seeded_with(
    seed: &str,
    count: usize,
    args: &GenerateArgs,
    policy: &BulkPolicy,
) -> Result<Vec<GeneratedName>> {
    preflight(count, args)?;
    tracing::debug!(seed, count, "seeded bulk generation");
    collect_unique(count, policy, |index| {
        seeded_generate(&sub_seed(seed, index), args)
    })
}

/// `count` unique names, each seeded from `source`.
pub fn bulk_random<S>(
    count: usize,
    args: &GenerateArgs,
    source: &mut S,
) -> Result<Vec<GeneratedName>>
where
    S: RandomnessSource + ?Sized,
{
    bulk_random_with(count, args, source, &BulkPolicy::default())
}

pub fn bulk_random_with<S>(
    count: usize,
    args: &GenerateArgs,
    source: &mut S,
    policy: &BulkPolicy,
) -> Result<Vec<GeneratedName>>
where
    S: RandomnessSource + ?Sized,
{
    preflight(count, args)?;
    tracing::debug!(source = source.name(), count, "random bulk generation");
    collect_unique(count, policy, |_| {
        let seed = source.next_seed()?;
        generate_from_seed(seed, args)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::merge::NameConfig;
    use crate::config::words::{DEFAULT_ADJECTIVES, DEFAULT_NOUNS};
    use crate::generator::entropy::{OsEntropy, Strength};

    struct Constant;

    impl RandomnessSource for Constant {
        fn next_seed(&mut self) -> Result<u32> {
            Ok(7)
        }
        fn strength(&self) -> Strength {
            Strength::Weak
        }
        fn name(&self) -> &'static str {
            "constant"
        }
    }

    fn token_length(n: u32) -> GenerateArgs {
        GenerateArgs::new().with_options(NameConfig::new().token_length(n))
    }

    fn names(batch: &[GeneratedName]) -> HashSet<&str> {
        batch.iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn test_capacity() {
        assert_eq!(capacity(91, 96, 10, 0), 91 * 96);
        assert_eq!(capacity(2, 3, 16, 2), 2 * 3 * 256);
        assert_eq!(capacity(1, 1, 10, 200), u128::MAX);
        assert_eq!(capacity(0, 5, 10, 2), 0);
    }

    #[test]
    fn test_seeded_batch_is_unique() {
        let batch = bulk_seeded("batch-seed", 10, &token_length(2)).unwrap();
        assert_eq!(batch.len(), 10);
        assert_eq!(names(&batch).len(), 10);
    }

    #[test]
    fn test_seeded_batch_is_reproducible() {
        let a = bulk_seeded("det-seed", 5, &token_length(1)).unwrap();
        let b = bulk_seeded("det-seed", 5, &token_length(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_batch_golden_prefix() {
        let batch = bulk_seeded("batch-seed", 3, &token_length(2)).unwrap();
        let got: Vec<&str> = batch.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(got, ["soft-dew-25", "divine-dew-32", "crimson-lake-66"]);
    }

    #[test]
    fn test_capacity_exceeded_fails_fast() {
        // "sun" appears twice in the built-in nouns.
        let total = DEFAULT_ADJECTIVES.len() * (DEFAULT_NOUNS.len() - 1);
        let err = bulk_seeded("overflow", total + 1, &token_length(0)).unwrap_err();
        assert!(matches!(
            err,
            NameError::CapacityExceeded { requested, .. } if requested == total + 1
        ));

        let err = bulk_random(total + 1, &token_length(0), &mut Constant).unwrap_err();
        assert!(matches!(err, NameError::CapacityExceeded { .. }));
    }

    #[test]
    fn test_exact_capacity_small_space() {
        let args = GenerateArgs::new()
            .with_adjectives(["a", "b"])
            .with_nouns(["x"])
            .with_options(NameConfig::new().token_length(0));
        let batch = bulk_seeded_with("tiny", 2, &args, &BulkPolicy::new(50)).unwrap();
        assert_eq!(names(&batch), HashSet::from(["a-x", "b-x"]));
    }

    #[test]
    fn test_repeated_entries_do_not_add_capacity() {
        let args = GenerateArgs::new()
            .with_adjectives(["a", "a"])
            .with_nouns(["x"])
            .with_options(NameConfig::new().token_length(1).token_chars("00"));
        let err = bulk_seeded("dup", 2, &args).unwrap_err();
        assert!(matches!(
            err,
            NameError::CapacityExceeded {
                requested: 2,
                capacity: 1
            }
        ));

        let batch = bulk_seeded("dup", 1, &args).unwrap();
        assert_eq!(batch[0].name, "a-x-0");
    }

    #[test]
    fn test_zero_retry_factor_is_clamped() {
        let policy = BulkPolicy::new(0);
        assert_eq!(policy.retry_factor(), 1);
        assert_eq!(BulkPolicy::default().retry_factor(), DEFAULT_RETRY_FACTOR);
        let batch = bulk_seeded_with("one", 1, &token_length(2), &policy).unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_random_batch_is_unique() {
        let batch = bulk_random(12, &token_length(2), &mut OsEntropy).unwrap();
        assert_eq!(batch.len(), 12);
        assert_eq!(names(&batch).len(), 12);
    }

    #[test]
    fn test_stuck_source_exhausts_retries() {
        let err = bulk_random_with(3, &token_length(4), &mut Constant, &BulkPolicy::new(4))
            .unwrap_err();
        assert!(matches!(
            err,
            NameError::RetriesExhausted {
                requested: 3,
                produced: 1,
                attempts: 12
            }
        ));
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(bulk_seeded("none", 0, &GenerateArgs::new()).unwrap().is_empty());
        assert!(bulk_random(0, &GenerateArgs::new(), &mut Constant)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_invalid_config_checked_before_generation() {
        let args = GenerateArgs::new().with_options(NameConfig::new().token_chars(""));
        assert!(matches!(
            bulk_seeded("bad", 1, &args),
            Err(NameError::InvalidConfiguration(_))
        ));
    }
}

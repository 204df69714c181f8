//! Quiz question selection
//!
//! A quiz walks through the questions of one category (or all of them)
//! without repeating any. The client sends back the ids it has already been
//! shown; the selector draws uniformly from what is left.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    /// Category id 0 means every category.
    pub fn from_category_id(id: i64) -> Self {
        if id == 0 {
            Self::All
        } else {
            Self::Category(id)
        }
    }
}

/// Pick a question id from `pool` that is not in `previous`.
///
/// `previous` is treated as a set: duplicates and ids outside the pool have
/// no effect. Returns `None` once every id in the pool has been seen.
pub fn pick_unseen<R>(pool: &[i64], previous: &[i64], rng: &mut R) -> Option<i64>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let remaining: Vec<i64> = pool
        .iter()
        .copied()
        .filter(|id| !seen.contains(id))
        .collect();

    remaining.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn zero_means_all() {
        assert_eq!(QuizScope::from_category_id(0), QuizScope::All);
        assert_eq!(QuizScope::from_category_id(3), QuizScope::Category(3));
    }

    #[test]
    fn empty_pool_is_exhausted() {
        assert_eq!(pick_unseen(&[], &[], &mut rng()), None);
    }

    #[test]
    fn fully_seen_pool_is_exhausted() {
        assert_eq!(pick_unseen(&[1, 2, 3], &[3, 1, 2], &mut rng()), None);
    }

    #[test]
    fn returns_the_only_unseen_id() {
        assert_eq!(pick_unseen(&[1, 2, 3], &[1, 3], &mut rng()), Some(2));
    }

    #[test]
    fn duplicate_previous_ids_do_not_exhaust_early() {
        // Three entries in `previous` but only one distinct id
        let pick = pick_unseen(&[10, 11, 12], &[10, 10, 10], &mut rng());
        assert!(matches!(pick, Some(11) | Some(12)));
    }

    #[test]
    fn foreign_previous_ids_are_ignored() {
        let pick = pick_unseen(&[5, 6], &[1, 2, 3, 4, 99], &mut rng());
        assert!(matches!(pick, Some(5) | Some(6)));
    }

    #[test]
    fn eventually_draws_every_remaining_id() {
        let mut rng = rng();
        let mut drawn = HashSet::new();
        for _ in 0..200 {
            drawn.insert(pick_unseen(&[1, 2, 3, 4], &[2], &mut rng).unwrap());
        }
        assert_eq!(drawn, HashSet::from([1, 3, 4]));
    }
}

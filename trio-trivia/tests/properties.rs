//! Property tests for the quiz selector

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trio_trivia::quiz::pick_unseen;

proptest! {
    /// Property: a pick is always from the pool and never previously seen
    #[test]
    fn prop_pick_is_unseen(
        pool in prop::collection::btree_set(1i64..500, 0..40),
        previous in prop::collection::vec(1i64..500, 0..60),
        seed in any::<u64>(),
    ) {
        let pool: Vec<i64> = pool.into_iter().collect();
        let mut rng = StdRng::seed_from_u64(seed);

        match pick_unseen(&pool, &previous, &mut rng) {
            Some(id) => {
                prop_assert!(pool.contains(&id));
                prop_assert!(!previous.contains(&id));
            }
            None => prop_assert!(pool.iter().all(|id| previous.contains(id))),
        }
    }

    /// Property: drawing repeatedly visits every question exactly once
    #[test]
    fn prop_full_quiz_visits_each_once(
        pool in prop::collection::btree_set(1i64..500, 0..30),
        seed in any::<u64>(),
    ) {
        let pool: Vec<i64> = pool.into_iter().collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut previous = Vec::new();

        while let Some(id) = pick_unseen(&pool, &previous, &mut rng) {
            previous.push(id);
        }

        let mut visited = previous.clone();
        visited.sort_unstable();
        prop_assert_eq!(visited, pool);
    }
}

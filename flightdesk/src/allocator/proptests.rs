//! Property-based tests for id allocation.

use super::IdAllocator;
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Step {
    Allocate,
    // index into the ids handed out so far
    Release(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Allocate),
        1 => any::<usize>().prop_map(Step::Release),
    ]
}

proptest! {
    // N allocations from a fresh allocator are seed+1..=seed+N
    #[test]
    fn sequential_without_releases(seed in -1i64..1_000_000, n in 1usize..200) {
        let mut ids = IdAllocator::new(seed);
        for i in 1..=n {
            prop_assert_eq!(ids.allocate(), seed + i64::try_from(i).unwrap());
        }
        prop_assert_eq!(ids.last_issued(), seed + i64::try_from(n).unwrap());
    }

    // A released id is the very next one handed out
    #[test]
    fn release_then_allocate_returns_released(seed in -1i64..1000, n in 1usize..50, pick in any::<prop::sample::Index>()) {
        let mut ids = IdAllocator::new(seed);
        let issued: Vec<i64> = (0..n).map(|_| ids.allocate()).collect();
        let victim = issued[pick.index(issued.len())];
        prop_assert!(ids.release(victim));
        prop_assert_eq!(ids.allocate(), victim);
        prop_assert_eq!(ids.allocate(), ids.last_issued());
    }

    // No id is ever outstanding twice
    #[test]
    fn outstanding_ids_unique(steps in prop::collection::vec(step_strategy(), 1..200)) {
        let mut ids = IdAllocator::new(-1);
        let mut outstanding: Vec<i64> = Vec::new();
        for step in steps {
            match step {
                Step::Allocate => {
                    let id = ids.allocate();
                    prop_assert!(!outstanding.contains(&id));
                    outstanding.push(id);
                }
                Step::Release(i) if !outstanding.is_empty() => {
                    let id = outstanding.swap_remove(i % outstanding.len());
                    prop_assert!(ids.release(id));
                }
                Step::Release(_) => {}
            }
        }
        let unique: HashSet<i64> = outstanding.iter().copied().collect();
        prop_assert_eq!(unique.len(), outstanding.len());
    }

    // Ids above the counter are never queued
    #[test]
    fn unissued_ids_ignored(seed in -1i64..1000, ahead in 1i64..1000) {
        let mut ids = IdAllocator::new(seed);
        prop_assert!(!ids.release(seed + ahead));
        prop_assert!(ids.pending_recycled().is_empty());
    }
}

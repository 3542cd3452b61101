//! Property-based tests for the state cell and the range allocator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use statekit::core::{GuardedState, Label};
use statekit::idgen::{AllocError, RangeIdAllocator};
use statekit::label_enum;
use std::collections::HashSet;

label_enum! {
    enum TestLabel {
        Initial,
        Processing,
        Complete,
        Failed,
    }
}

prop_compose! {
    fn arbitrary_label()(variant in 0..4u8) -> TestLabel {
        match variant {
            0 => TestLabel::Initial,
            1 => TestLabel::Processing,
            2 => TestLabel::Complete,
            _ => TestLabel::Failed,
        }
    }
}

prop_compose! {
    fn arbitrary_bounds()(min in -10_000i64..10_000, size in 1i64..128) -> (i64, i64) {
        (min, min + size - 1)
    }
}

#[derive(Clone, Debug)]
enum Op {
    Allocate,
    /// Free the id at `min + offset`; offsets past the range exercise ignored frees.
    Free(i64),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Allocate),
        2 => (-4i64..136).prop_map(Op::Free),
    ]
}

proptest! {
    #[test]
    fn label_name_is_stable(label in arbitrary_label()) {
        prop_assert_eq!(label.name(), label.name());
    }

    #[test]
    fn cell_reads_last_write(labels in prop::collection::vec(arbitrary_label(), 1..20)) {
        let cell = GuardedState::new(TestLabel::Initial);
        for label in &labels {
            cell.set(*label);
        }

        let last = *labels.last().unwrap();
        prop_assert_eq!(cell.current(), last);
        prop_assert!(cell.is(&last));
    }

    #[test]
    fn allocations_are_unique_and_in_bounds((min, max) in arbitrary_bounds()) {
        let ids = RangeIdAllocator::new(min, max).unwrap();
        let mut seen = HashSet::new();

        for _ in 0..ids.capacity() {
            let id = ids.allocate().unwrap();
            prop_assert!(min <= id && id <= max);
            prop_assert!(seen.insert(id));
        }

        prop_assert_eq!(
            ids.allocate(),
            Err(AllocError::CapacityExhausted { min, max })
        );
    }

    #[test]
    fn freed_id_is_reused_after_exhaustion(
        (min, max) in arbitrary_bounds(),
        pick in any::<prop::sample::Index>(),
    ) {
        let ids = RangeIdAllocator::new(min, max).unwrap();
        let all: Vec<i64> = (0..ids.capacity()).map(|_| ids.allocate().unwrap()).collect();

        let freed = *pick.get(&all);
        ids.free(freed);

        prop_assert_eq!(ids.allocate(), Ok(freed));
        prop_assert!(ids.allocate().is_err());
    }

    #[test]
    fn allocator_matches_set_model(
        (min, max) in arbitrary_bounds(),
        ops in prop::collection::vec(arbitrary_op(), 0..300),
    ) {
        let ids = RangeIdAllocator::new(min, max).unwrap();
        let size = ids.capacity() as usize;
        let mut live = HashSet::new();

        for op in ops {
            match op {
                Op::Allocate => match ids.allocate() {
                    Ok(id) => {
                        prop_assert!(ids.contains(id));
                        prop_assert!(live.insert(id), "id {} handed out twice", id);
                    }
                    Err(err) => {
                        prop_assert_eq!(err, AllocError::CapacityExhausted { min, max });
                        prop_assert_eq!(live.len(), size);
                    }
                },
                Op::Free(offset) => {
                    let id = min + offset;
                    ids.free(id);
                    live.remove(&id);
                }
            }
            prop_assert_eq!(ids.in_use() as usize, live.len());
        }

        // Nothing freed is ever lost: the remaining capacity is exactly the
        // complement of the live set.
        let mut rest = HashSet::new();
        while let Ok(id) = ids.allocate() {
            prop_assert!(!live.contains(&id));
            rest.insert(id);
        }
        prop_assert_eq!(rest.len() + live.len(), size);
    }

    #[test]
    fn repeated_and_foreign_frees_are_harmless(
        (min, max) in arbitrary_bounds(),
        foreign in prop::collection::vec(any::<i64>(), 0..20),
    ) {
        let ids = RangeIdAllocator::new(min, max).unwrap();
        let first = ids.allocate().unwrap();

        for id in foreign.iter().filter(|id| !ids.contains(**id)) {
            ids.free(*id);
        }
        prop_assert_eq!(ids.in_use(), 1);

        ids.free(first);
        ids.free(first);
        prop_assert_eq!(ids.in_use(), 0);

        let mut seen = HashSet::new();
        for _ in 0..ids.capacity() {
            prop_assert!(seen.insert(ids.allocate().unwrap()));
        }
        prop_assert!(ids.allocate().is_err());
    }
}

//! Multi-threaded behavior of the state cell and the range allocator.

use statekit::core::GuardedState;
use statekit::idgen::{AllocError, RangeIdAllocator};
use statekit::label_enum;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

label_enum! {
    enum Phase {
        Starting,
        Running,
        Stopping,
    }
}

const THREADS: usize = 8;

#[test]
fn racing_allocators_split_the_range_exactly() {
    let ids = Arc::new(RangeIdAllocator::new(1_000, 1_999).unwrap());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let ids = Arc::clone(&ids);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut won = Vec::new();
                let mut failures = 0usize;
                loop {
                    match ids.allocate() {
                        Ok(id) => won.push(id),
                        Err(AllocError::CapacityExhausted { .. }) => {
                            failures += 1;
                            // Keep hammering a little after exhaustion.
                            if failures == 16 {
                                break;
                            }
                        }
                        Err(other) => panic!("unexpected error: {other}"),
                    }
                }
                won
            })
        })
        .collect();

    let mut all = Vec::new();
    for handle in handles {
        all.extend(handle.join().unwrap());
    }

    let distinct: HashSet<i64> = all.iter().copied().collect();
    assert_eq!(all.len(), 1_000);
    assert_eq!(distinct.len(), 1_000);
    assert!(distinct.iter().all(|id| (1_000..=1_999).contains(id)));
    assert_eq!(ids.in_use(), 1_000);
    assert!(ids.allocate().is_err());
}

#[test]
fn churn_never_hands_out_a_live_id_twice() {
    let ids = Arc::new(RangeIdAllocator::new(0, 63).unwrap());
    let live = Arc::new(parking_lot::Mutex::new(HashSet::new()));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let ids = Arc::clone(&ids);
            let live = Arc::clone(&live);
            thread::spawn(move || {
                for _ in 0..2_000 {
                    let Ok(id) = ids.allocate() else {
                        continue;
                    };
                    assert!(live.lock().insert(id), "id {id} was already live");
                    assert!(live.lock().remove(&id));
                    ids.free(id);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(ids.in_use(), 0);
    assert!(live.lock().is_empty());
}

#[test]
fn cell_write_is_observed_by_all_readers() {
    let cell = Arc::new(GuardedState::new(Phase::Starting));
    let barrier = Arc::new(Barrier::new(THREADS + 1));

    let readers: Vec<_> = (0..THREADS)
        .map(|_| {
            let cell = Arc::clone(&cell);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (cell.current(), cell.is(&Phase::Running))
            })
        })
        .collect();

    cell.set(Phase::Running);
    barrier.wait();

    for reader in readers {
        assert_eq!(reader.join().unwrap(), (Phase::Running, true));
    }

    cell.set(Phase::Stopping);
    assert!(cell.is(&Phase::Stopping));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn allocator_shared_across_blocking_tasks() {
    let ids = Arc::new(RangeIdAllocator::new(1, 256).unwrap());

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let ids = Arc::clone(&ids);
            tokio::task::spawn_blocking(move || {
                (0..16).map(|_| ids.allocate().unwrap()).collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all = HashSet::new();
    for task in tasks {
        for id in task.await.unwrap() {
            assert!(all.insert(id));
        }
    }

    assert_eq!(all.len(), 256);
    assert_eq!(
        ids.allocate(),
        Err(AllocError::CapacityExhausted { min: 1, max: 256 })
    );
}

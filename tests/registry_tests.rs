use floorforge::affinity::Score;
use floorforge::grid::Grid;
use floorforge::registry::{Candidate, SolutionRegistry, SLOT_COUNT};
use std::sync::Arc;
use std::thread;

fn candidate(score: Score) -> Candidate {
    let grid = Grid::from_stations(2, 2, &[1, 2, 3, 4]).unwrap();
    Candidate::new(grid, score)
}

#[test]
fn test_retention_is_bounded_and_keeps_the_best() {
    let registry = SolutionRegistry::new();
    for score in 1..=25 {
        registry.submit(candidate(score));
    }

    assert_eq!(registry.occupied(), SLOT_COUNT);
    assert_eq!(registry.all_slots().len(), SLOT_COUNT);
    assert_eq!(registry.snapshot().unwrap().score(), 25);
}

#[test]
fn test_random_churn_never_evicts_the_maximum() {
    let registry = SolutionRegistry::new();
    let mut rng = fastrand::Rng::with_seed(7);
    let mut max_seen = Score::MIN;

    for _ in 0..1000 {
        let score = rng.i64(0..10_000);
        max_seen = max_seen.max(score);
        registry.submit(candidate(score));
    }

    assert_eq!(registry.occupied(), SLOT_COUNT);
    assert_eq!(registry.snapshot().unwrap().score(), max_seen);
}

#[test]
fn test_concurrent_submissions_keep_global_best() {
    let registry = Arc::new(SolutionRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..50 {
                    registry.submit(candidate(t * 1000 + i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.occupied(), SLOT_COUNT);
    // Highest submitted score is 7 * 1000 + 49; an incoming maximum always
    // lands (any held slot is beatable) and only an equal score can
    // displace it afterwards.
    assert_eq!(registry.snapshot().unwrap().score(), 7049);
}

#[test]
fn test_snapshot_copies_are_independent() {
    let registry = SolutionRegistry::new();
    registry.submit(candidate(5));

    let first = registry.snapshot().unwrap();
    registry.submit(candidate(8));

    assert_eq!(first.score(), 5, "earlier snapshot must not change");
    assert_eq!(registry.snapshot().unwrap().score(), 8);
}

use crate::affinity::Score;
use crate::grid::Grid;
use serde::Serialize;
use std::sync::Mutex;

/// How many published candidates are retained at once.
pub const SLOT_COUNT: usize = 10;

/// Immutable snapshot of a floor and the score it carried when published.
/// The publishing worker keeps evolving its own grid; the candidate holds a
/// deep copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    grid: Grid,
    score: Score,
}

impl Candidate {
    pub fn new(grid: Grid, score: Score) -> Self {
        Self { grid, score }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

/// Bounded best-list shared by every worker. One lock covers each whole
/// operation, so concurrent submissions never interleave inside a slot.
#[derive(Debug)]
pub struct SolutionRegistry {
    slots: Mutex<Vec<Option<Candidate>>>,
}

impl SolutionRegistry {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(vec![None; SLOT_COUNT]),
        }
    }

    /// Files a candidate: the first empty slot takes it; failing that, the
    /// first slot whose score is no better than the candidate's is
    /// replaced; failing both, the candidate is dropped. First match wins
    /// in both scans.
    pub fn submit(&self, candidate: Candidate) {
        let mut slots = self.slots.lock().unwrap();

        if let Some(empty) = slots.iter_mut().find(|slot| slot.is_none()) {
            *empty = Some(candidate);
            return;
        }

        for slot in slots.iter_mut() {
            if let Some(held) = slot {
                if held.score() <= candidate.score() {
                    *slot = Some(candidate);
                    return;
                }
            }
        }
    }

    /// Best candidate currently held, if any. Ties go to the lowest slot
    /// index.
    pub fn snapshot(&self) -> Option<Candidate> {
        let slots = self.slots.lock().unwrap();
        let mut best: Option<&Candidate> = None;
        for candidate in slots.iter().flatten() {
            match best {
                Some(held) if held.score() >= candidate.score() => {}
                _ => best = Some(candidate),
            }
        }
        best.cloned()
    }

    /// Every slot in order, occupied or not.
    pub fn all_slots(&self) -> Vec<Option<Candidate>> {
        self.slots.lock().unwrap().clone()
    }

    pub fn occupied(&self) -> usize {
        self.slots
            .lock()
            .unwrap()
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }
}

impl Default for SolutionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(score: Score) -> Candidate {
        let grid = Grid::from_stations(2, 1, &[1, 2]).unwrap();
        Candidate::new(grid, score)
    }

    #[test]
    fn test_empty_registry_has_no_snapshot() {
        let registry = SolutionRegistry::new();
        assert!(registry.snapshot().is_none());
        assert_eq!(registry.occupied(), 0);
    }

    #[test]
    fn test_fills_empty_slots_in_order() {
        let registry = SolutionRegistry::new();
        registry.submit(candidate(5));
        registry.submit(candidate(3));

        let slots = registry.all_slots();
        assert_eq!(slots[0].as_ref().map(Candidate::score), Some(5));
        assert_eq!(slots[1].as_ref().map(Candidate::score), Some(3));
        assert!(slots[2].is_none());
    }

    #[test]
    fn test_full_registry_replaces_first_beatable_slot() {
        let registry = SolutionRegistry::new();
        for score in [9, 4, 7, 4, 8, 2, 6, 5, 3, 9] {
            registry.submit(candidate(score));
        }
        // 9 > first slot fails (9 <= 9 passes): slot 0 is the first match.
        registry.submit(candidate(9));
        let slots = registry.all_slots();
        assert_eq!(slots[0].as_ref().map(Candidate::score), Some(9));

        // 5 skips 9 but lands on the 4 in slot 1.
        registry.submit(candidate(5));
        let slots = registry.all_slots();
        assert_eq!(slots[1].as_ref().map(Candidate::score), Some(5));
    }

    #[test]
    fn test_full_registry_discards_unbeatable_candidate() {
        let registry = SolutionRegistry::new();
        for _ in 0..SLOT_COUNT {
            registry.submit(candidate(10));
        }
        registry.submit(candidate(1));

        let slots = registry.all_slots();
        assert!(slots.iter().flatten().all(|c| c.score() == 10));
    }

    #[test]
    fn test_snapshot_prefers_lowest_index_on_ties() {
        let registry = SolutionRegistry::new();
        registry.submit(candidate(3));
        registry.submit(Candidate::new(Grid::from_stations(2, 1, &[3, 4]).unwrap(), 7));
        registry.submit(Candidate::new(Grid::from_stations(2, 1, &[5, 6]).unwrap(), 7));

        let best = registry.snapshot().unwrap();
        assert_eq!(best.score(), 7);
        assert_eq!(best.grid().cells(), &[3, 4]);
    }
}

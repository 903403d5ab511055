use floorforge::affinity::{score, station_gap};
use floorforge::grid::{Grid, StationId};
use rstest::rstest;

fn grid(width: usize, height: usize, stations: &[StationId]) -> Grid {
    Grid::from_stations(width, height, stations).unwrap()
}

// --- STATION GAP ---

#[rstest]
#[case(3, 3, 0)] // identical stations
#[case(1, 5, 4)]
#[case(5, 1, 4)] // symmetric
#[case(0, 9, 0)] // empty cell pairs for free
#[case(9, 0, 0)]
#[case(0, 0, 0)]
fn test_station_gap(#[case] a: StationId, #[case] b: StationId, #[case] expected: i64) {
    assert_eq!(station_gap(a, b), expected);
}

// --- WHOLE-FLOOR SCORE ---

#[rstest]
#[case(2, 2, vec![1, 5, 0, 3], 12)] // one empty corner
#[case(2, 2, vec![1, 2, 3, 4], 12)]
#[case(1, 1, vec![7], 0)] // no neighbors at all
#[case(2, 1, vec![2, 9], 14)] // one pair, counted from both sides
#[case(2, 2, vec![0, 0, 0, 0], 0)] // empty floor
#[case(3, 1, vec![5, 0, 2], 2)] // only the half-weight pair contributes
#[case(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9], 72)]
fn test_known_scores(
    #[case] width: usize,
    #[case] height: usize,
    #[case] stations: Vec<StationId>,
    #[case] expected: i64,
) {
    assert_eq!(score(&grid(width, height, &stations)), expected);
}

#[test]
fn test_empty_cells_are_transparent_not_zero_valued() {
    // A station next to an empty cell scores the same as one next to
    // nothing at all; 0 is absence, not a station with identifier zero.
    let against_empty = grid(2, 1, &[6, 0]);
    let alone = grid(1, 1, &[6]);
    assert_eq!(score(&against_empty), score(&alone));
}

#[test]
fn test_two_step_halves_each_term_separately() {
    // The middle station sees two half-weight partners, each gap 3. Per-term
    // truncation gives 3/2 + 3/2 = 2 from its side, not (3 + 3)/2 = 3.
    let floor = grid(5, 1, &[3, 0, 6, 0, 9]);
    assert_eq!(score(&floor), 4);
}

#[test]
fn test_vertical_two_step_uses_row_two_above() {
    // Column floor: the lower station's half-weight partner is two rows up,
    // not the adjacent (empty) row.
    let floor = grid(1, 5, &[0, 6, 0, 2, 0]);
    assert_eq!(score(&floor), 4);
}

#[test]
fn test_score_is_never_negative() {
    let floor = grid(4, 4, &[9, 1, 8, 2, 7, 3, 6, 4, 5, 0, 5, 0, 1, 9, 2, 8]);
    assert!(score(&floor) >= 0);
}

#[test]
fn test_edge_cells_skip_out_of_bounds_neighbors() {
    // Corner station: exactly one adjacent and no two-step partner in a
    // 2-wide floor.
    let floor = grid(2, 2, &[4, 1, 0, 0]);
    // (0,0) sees (0,1): gap 3. (0,1) sees (0,0): gap 3.
    assert_eq!(score(&floor), 6);
}

use crate::grid::{Grid, StationId};

pub type Score = i64;

// Immediate neighbors count in full; cells two apart on the same axis
// count at half weight, truncated per term.
const ADJACENT: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const TWO_STEP: [(isize, isize); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Gap between two station identifiers. Any pairing with an empty cell is
/// free.
#[inline(always)]
pub fn station_gap(a: StationId, b: StationId) -> Score {
    if a == 0 || b == 0 {
        return 0;
    }
    (a as Score - b as Score).abs()
}

/// Affinity of the whole floor: every occupied cell sums the gap to each
/// in-bounds 4-connected neighbor, plus half the gap to each in-bounds
/// neighbor two cells away on the same axis. Each adjacent pair is counted
/// once from each side. Higher means more diverse neighborhoods.
pub fn score(grid: &Grid) -> Score {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;
    let mut total: Score = 0;

    for row in 0..rows {
        for col in 0..cols {
            let here = grid.get(row as usize, col as usize);
            if here == 0 {
                continue;
            }
            for (dr, dc) in ADJACENT {
                let (r, c) = (row + dr, col + dc);
                if r >= 0 && r < rows && c >= 0 && c < cols {
                    total += station_gap(here, grid.get(r as usize, c as usize));
                }
            }
            for (dr, dc) in TWO_STEP {
                let (r, c) = (row + dr, col + dc);
                if r >= 0 && r < rows && c >= 0 && c < cols {
                    total += station_gap(here, grid.get(r as usize, c as usize)) / 2;
                }
            }
        }
    }
    total
}

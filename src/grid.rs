use crate::error::{FfResult, FloorForgeError};
use serde::Serialize;

/// Positive integer tag of a placed station; 0 marks an empty cell.
pub type StationId = u16;

/// Rectangular factory floor, stored row-major: `height` rows of `width`
/// columns. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<StationId>,
}

impl Grid {
    /// Builds a grid from a flat row-major station sequence. The sequence
    /// length must match the floor exactly.
    pub fn from_stations(width: usize, height: usize, stations: &[StationId]) -> FfResult<Self> {
        if width == 0 || height == 0 {
            return Err(FloorForgeError::Validation(format!(
                "Grid dimensions must be positive (got {}x{})",
                width, height
            )));
        }
        if stations.len() != width * height {
            return Err(FloorForgeError::Validation(format!(
                "Station list has {} entries but a {}x{} floor needs {}",
                stations.len(),
                width,
                height,
                width * height
            )));
        }
        Ok(Self {
            width,
            height,
            cells: stations.to_vec(),
        })
    }

    #[inline(always)]
    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) is outside the {}x{} floor",
            row,
            col,
            self.width,
            self.height
        );
        row * self.width + col
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> StationId {
        self.cells[self.idx(row, col)]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: StationId) {
        let i = self.idx(row, col);
        self.cells[i] = value;
    }

    /// Exchanges two cells. Empty cells swap like any other; swapping a
    /// cell with itself is a no-op.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ia = self.idx(a.0, a.1);
        let ib = self.idx(b.0, b.1);
        self.cells.swap(ia, ib);
    }

    pub fn rows(&self) -> usize {
        self.height
    }

    pub fn cols(&self) -> usize {
        self.width
    }

    pub fn clone_row(&self, row: usize) -> Vec<StationId> {
        let start = self.idx(row, 0);
        self.cells[start..start + self.width].to_vec()
    }

    pub fn replace_row(&mut self, row: usize, values: &[StationId]) {
        assert_eq!(
            values.len(),
            self.width,
            "replacement row has {} entries but the floor is {} wide",
            values.len(),
            self.width
        );
        let start = self.idx(row, 0);
        self.cells[start..start + self.width].copy_from_slice(values);
    }

    /// Flat row-major view of every cell.
    pub fn cells(&self) -> &[StationId] {
        &self.cells
    }
}

use crate::error::{FfResult, FloorForgeError};
use clap::Args;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    // === FLOOR ===
    #[arg(long, default_value_t = 8)]
    pub width: usize,
    #[arg(long, default_value_t = 4)]
    pub height: usize,

    // === POPULATION ===
    #[arg(long, default_value_t = 32)]
    pub workers: usize,

    // === STATION GENERATION ===
    #[arg(long, default_value_t = 20)]
    pub hole_percent: u32,
    #[arg(long, default_value_t = 9)]
    pub max_station_id: u16,

    // === SEARCH LOOP ===
    #[arg(long, default_value_t = 1)]
    pub accept_worse_percent: u32,
    #[arg(long, default_value_t = 100)]
    pub stagnation_limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            width: 8,
            height: 4,
            workers: 32,
            hole_percent: 20,
            max_station_id: 9,
            accept_worse_percent: 1,
            stagnation_limit: 100,
        }
    }
}

impl SearchParams {
    pub fn validate(&self) -> FfResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FloorForgeError::Config(format!(
                "Grid dimensions must be positive (got {}x{})",
                self.width, self.height
            )));
        }
        if self.workers == 0 {
            return Err(FloorForgeError::Config(
                "At least one worker is required".to_string(),
            ));
        }
        if self.hole_percent > 100 {
            return Err(FloorForgeError::Config(format!(
                "--hole-percent must be 0-100 (got {})",
                self.hole_percent
            )));
        }
        if self.max_station_id == 0 {
            return Err(FloorForgeError::Config(
                "--max-station-id must be at least 1 (0 marks an empty cell)".to_string(),
            ));
        }
        if self.accept_worse_percent > 100 {
            return Err(FloorForgeError::Config(format!(
                "--accept-worse-percent must be 0-100 (got {})",
                self.accept_worse_percent
            )));
        }
        if self.stagnation_limit == 0 {
            return Err(FloorForgeError::Config(
                "--stagnation-limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn tuning(&self) -> SearchTuning {
        SearchTuning {
            accept_worse_percent: self.accept_worse_percent,
            stagnation_limit: self.stagnation_limit,
        }
    }
}

/// The two knobs of the per-worker loop: how often a losing swap is kept
/// anyway, and how many consecutive non-improving swaps trigger a publish
/// and row exchange.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchTuning {
    pub accept_worse_percent: u32,
    pub stagnation_limit: u32,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            accept_worse_percent: 1,
            stagnation_limit: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Json,
}

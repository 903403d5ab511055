use crate::affinity::{self, Score};
use crate::config::SearchTuning;
use crate::error::FfResult;
use crate::exchange::{Cancelled, ExchangeCoordinator};
use crate::grid::{Grid, StationId};
use crate::registry::{Candidate, SolutionRegistry};
use crate::signal::StopSignal;
use std::sync::Arc;
use tracing::debug;

/// One independent searcher. Owns its grid outright and talks to the rest
/// of the population only through the registry and the exchange
/// coordinator. Runs until its stop signal fires; there is no
/// self-terminating condition.
pub struct Worker {
    pub id: usize,
    pub grid: Grid,
    pub score: Score,
    pub stagnation: u32,
    tuning: SearchTuning,
    rng: fastrand::Rng,
    exchange: Arc<ExchangeCoordinator>,
    registry: Arc<SolutionRegistry>,
    stop: StopSignal,
    published: u64,
    exchanges: u64,
}

impl Worker {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: usize,
        width: usize,
        height: usize,
        stations: &[StationId],
        exchange: Arc<ExchangeCoordinator>,
        registry: Arc<SolutionRegistry>,
        tuning: SearchTuning,
        seed: Option<u64>,
    ) -> FfResult<Self> {
        let grid = Grid::from_stations(width, height, stations)?;
        let rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        let score = affinity::score(&grid);

        Ok(Self {
            id,
            grid,
            score,
            stagnation: 0,
            tuning,
            rng,
            exchange,
            registry,
            stop: StopSignal::new(),
            published: 0,
            exchanges: 0,
        })
    }

    /// Handle for stopping this worker from another thread. Observed at the
    /// top of each iteration and inside a blocked exchange.
    pub fn stop_handle(&self) -> StopSignal {
        self.stop.clone()
    }

    pub fn request_stop(&self) {
        self.stop.request_stop();
    }

    /// One search move: pick two cells uniformly at random (possibly the
    /// same one), swap them and rescore. An improving swap is kept; a
    /// losing swap is still kept with the configured accept-worse chance,
    /// otherwise reverted. Returns whether the score improved.
    pub fn try_swap(&mut self) -> bool {
        let a = self.random_cell();
        let b = self.random_cell();

        self.grid.swap(a, b);
        let challenger = affinity::score(&self.grid);

        if challenger > self.score {
            self.score = challenger;
            return true;
        }

        if self.rng.u32(0..100) < self.tuning.accept_worse_percent {
            self.score = challenger;
        } else {
            self.grid.swap(a, b);
        }
        false
    }

    /// The search loop. Blocking; meant for a dedicated thread. Improving
    /// swaps reset the stagnation counter, everything else raises it; at
    /// the stagnation limit the worker publishes its state and trades a
    /// row with whichever other worker reaches the coordinator.
    pub fn run(&mut self) {
        debug!("Worker {} starting at score {}", self.id, self.score);

        while !self.stop.is_stopped() {
            if self.try_swap() {
                self.stagnation = 0;
                continue;
            }
            self.stagnation += 1;

            if self.stagnation >= self.tuning.stagnation_limit {
                self.publish();
                if self.trade_row().is_err() {
                    break;
                }
                self.stagnation = 0;
            }
        }

        debug!(
            "Worker {} stopped at score {} ({} published, {} exchanges)",
            self.id, self.score, self.published, self.exchanges
        );
    }

    /// Files a deep copy of the current state with the registry.
    pub fn publish(&mut self) {
        self.registry
            .submit(Candidate::new(self.grid.clone(), self.score));
        self.published += 1;
        debug!("Worker {} published score {}", self.id, self.score);
    }

    /// Swaps a random row with a rendezvous partner, then rebuilds the
    /// score from scratch. A cancellation while waiting leaves the grid
    /// untouched.
    pub fn trade_row(&mut self) -> Result<(), Cancelled> {
        let row = self.rng.usize(0..self.grid.rows());
        let outgoing = self.grid.clone_row(row);
        let incoming = self.exchange.exchange(outgoing, &self.stop)?;

        self.grid.replace_row(row, &incoming);
        self.score = affinity::score(&self.grid);
        self.exchanges += 1;
        debug!(
            "Worker {} traded row {}, rescored to {}",
            self.id, row, self.score
        );
        Ok(())
    }

    fn random_cell(&mut self) -> (usize, usize) {
        (
            self.rng.usize(0..self.grid.rows()),
            self.rng.usize(0..self.grid.cols()),
        )
    }
}

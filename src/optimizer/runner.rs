use crate::config::SearchParams;
use crate::error::FfResult;
use crate::exchange::ExchangeCoordinator;
use crate::grid::StationId;
use crate::optimizer::Worker;
use crate::registry::SolutionRegistry;
use crate::signal::StopSignal;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{info, warn};

/// A running worker population plus the shared state they report into.
/// Dedicated OS threads, one per worker: workers block in the rendezvous
/// for unbounded stretches, so they cannot share a task pool.
pub struct SearchPool {
    registry: Arc<SolutionRegistry>,
    stops: Vec<StopSignal>,
    handles: Vec<JoinHandle<()>>,
}

impl SearchPool {
    /// Validates `params`, builds one worker per configured thread from the
    /// same initial station list, and starts them all. With a base `seed`,
    /// worker `i` runs on `seed + i` so single-worker runs are
    /// reproducible.
    pub fn launch(
        params: &SearchParams,
        stations: &[StationId],
        seed: Option<u64>,
    ) -> FfResult<Self> {
        params.validate()?;

        if params.workers < 2 {
            warn!(
                "⚠️  {} worker can never pair up for an exchange; it will idle at the rendezvous once stagnant",
                params.workers
            );
        }

        let exchange = Arc::new(ExchangeCoordinator::new());
        let registry = Arc::new(SolutionRegistry::new());

        let mut stops = Vec::with_capacity(params.workers);
        let mut handles = Vec::with_capacity(params.workers);

        for id in 0..params.workers {
            let mut worker = Worker::new(
                id,
                params.width,
                params.height,
                stations,
                Arc::clone(&exchange),
                Arc::clone(&registry),
                params.tuning(),
                seed.map(|s| s + id as u64),
            )?;
            stops.push(worker.stop_handle());

            let handle = std::thread::Builder::new()
                .name(format!("worker-{}", id))
                .spawn(move || worker.run())?;
            handles.push(handle);
        }

        info!(
            "🏭 Launched {} workers on a {}x{} floor ({} stations placed)",
            params.workers,
            params.width,
            params.height,
            stations.iter().filter(|&&s| s != 0).count()
        );
        Ok(Self {
            registry,
            stops,
            handles,
        })
    }

    /// The shared best-list, for periodic snapshots while the pool runs.
    pub fn registry(&self) -> &Arc<SolutionRegistry> {
        &self.registry
    }

    /// Signals every worker to stop without waiting for them.
    pub fn request_stop(&self) {
        for stop in &self.stops {
            stop.request_stop();
        }
    }

    pub fn worker_count(&self) -> usize {
        self.handles.len()
    }

    /// Stops every worker and waits for them all to exit, then hands back
    /// the registry for final inspection.
    pub fn shutdown(self) -> Arc<SolutionRegistry> {
        info!("🛑 Stopping {} workers...", self.handles.len());
        self.request_stop();

        for handle in self.handles {
            if handle.join().is_err() {
                warn!("A worker thread panicked before shutdown");
            }
        }

        match self.registry.snapshot() {
            Some(best) => info!(
                "🏁 Search stopped; best published score {} across {} filled slots",
                best.score(),
                self.registry.occupied()
            ),
            None => info!("🏁 Search stopped before any worker published"),
        }
        self.registry
    }
}

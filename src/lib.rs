pub mod affinity;
pub mod config;
pub mod error;
pub mod exchange;
pub mod grid;
pub mod optimizer;
pub mod registry;
pub mod signal;
pub mod stations;

// cmd and reports are modules of the binary crate (main.rs).

pub use affinity::Score;
pub use config::{OutputFormat, SearchParams, SearchTuning};
pub use error::{FfResult, FloorForgeError};
pub use exchange::{Cancelled, ExchangeCoordinator};
pub use grid::{Grid, StationId};
pub use optimizer::{SearchPool, Worker};
pub use registry::{Candidate, SolutionRegistry};
pub use signal::StopSignal;

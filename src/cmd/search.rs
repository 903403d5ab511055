use crate::reports;
use clap::Args;
use floorforge::config::{OutputFormat, SearchParams};
use floorforge::error::{FfResult, FloorForgeError};
use floorforge::optimizer::SearchPool;
use floorforge::stations;
use std::fs;
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: SearchParams,

    #[arg(short = 'T', long, default_value_t = 10)]
    pub time: u64,

    #[arg(long, default_value_t = 1000)]
    pub poll_ms: u64,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(short = 'f', long)]
    pub file: Option<String>,

    #[arg(long, default_value = "table")]
    pub format: String,

    #[arg(short = 'o', long)]
    pub out: Option<String>,
}

pub fn run(args: SearchArgs) -> FfResult<()> {
    let format = OutputFormat::from_str(&args.format)
        .map_err(|_| FloorForgeError::Config(format!("Unknown output format '{}'", args.format)))?;
    args.params.validate()?;

    let stations = match &args.file {
        Some(path) => {
            info!("📂 Loading stations from {}", path);
            let loaded = stations::load_stations_csv(path)?;
            if loaded.len() != args.params.cell_count() {
                return Err(FloorForgeError::Validation(format!(
                    "{} stations loaded but the {}x{} floor has {} cells",
                    loaded.len(),
                    args.params.width,
                    args.params.height,
                    args.params.cell_count()
                )));
            }
            loaded
        }
        None => {
            let mut rng = match args.seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            stations::random_stations(
                args.params.cell_count(),
                args.params.hole_percent,
                args.params.max_station_id,
                &mut rng,
            )
        }
    };

    let pool = SearchPool::launch(&args.params, &stations, args.seed)?;

    // Poll the registry on the configured cadence until time runs out.
    let deadline = Instant::now() + Duration::from_secs(args.time);
    let poll = Duration::from_millis(args.poll_ms.max(1));
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        thread::sleep(poll.min(remaining));

        match pool.registry().snapshot() {
            Some(best) => info!(
                "Best so far: {} ({} slots filled)",
                best.score(),
                pool.registry().occupied()
            ),
            None => info!("No candidate published yet"),
        }
    }

    let registry = pool.shutdown();
    let slots = registry.all_slots();

    match format {
        OutputFormat::Table => {
            if let Some(best) = registry.snapshot() {
                reports::print_grid("Best floor", best.grid());
            }
            reports::print_slots(&slots);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&slots)?);
        }
    }

    if let Some(path) = &args.out {
        fs::write(path, serde_json::to_string_pretty(&slots)?)?;
        info!("💾 Wrote slot dump to {}", path);
    }
    Ok(())
}
